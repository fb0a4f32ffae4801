use std::collections::HashMap;
use std::io::{self, Write};
use crate::error::{FixtureError, Result};

/// User information keyed by field name (`name`, `email`)
pub type UserData = HashMap<String, String>;

pub const NAME_KEY: &str = "name";
pub const EMAIL_KEY: &str = "email";

/// Build a user mapping from name and email
#[must_use]
pub fn user_data(name: &str, email: &str) -> UserData {
    let mut data = UserData::new();
    data.insert(NAME_KEY.to_string(), name.to_string());
    data.insert(EMAIL_KEY.to_string(), email.to_string());
    data
}

fn lookup<'a>(user: &'a UserData, key: &str) -> Result<&'a str> {
    user.get(key)
        .map(String::as_str)
        .ok_or_else(|| FixtureError::MissingKey(key.to_string()))
}

/// Format user data as `User: {name} <{email}>`, printing a diagnostic line
/// to standard output first.
///
/// # Errors
///
/// Returns [`FixtureError::MissingKey`] if `name` or `email` is absent, or an
/// I/O error if stdout cannot be written.
pub fn process_user_data(user: &UserData) -> Result<String> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    process_user_data_to(user, &mut handle)
}

/// Same as [`process_user_data`], with the diagnostic line written to `sink`.
///
/// # Errors
///
/// Returns [`FixtureError::MissingKey`] if `name` or `email` is absent, or an
/// I/O error if writing to `sink` fails.
pub fn process_user_data_to<W: Write + ?Sized>(user: &UserData, sink: &mut W) -> Result<String> {
    let name = lookup(user, NAME_KEY)?;
    let email = lookup(user, EMAIL_KEY)?;

    // No format check on email
    writeln!(sink, "Processing user: {name}")?;
    log::debug!("formatted user record for {name}");

    Ok(format!("User: {name} <{email}>"))
}
