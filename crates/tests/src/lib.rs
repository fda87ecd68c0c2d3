#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod appointment_tests;

#[cfg(test)]
mod analytics_tests;
