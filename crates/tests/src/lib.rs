#[cfg(test)]
mod common;


#[cfg(test)]
mod signup_submit_tests;

#[cfg(test)]
mod signup_validation_tests;
