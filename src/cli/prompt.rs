use std::io::{BufRead, Write};

use regex::Regex;

use crate::errors::{NewsletterError, NewsletterResult};

/// Loose shape check; the mail API has the final say
pub fn validate_recipient(input: &str) -> NewsletterResult<String> {
    let address = input.trim();
    let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map_err(|e| NewsletterError::Config(e.to_string()))?;

    if !pattern.is_match(address) {
        return Err(NewsletterError::InvalidInput(format!(
            "Not an email address: {:?}",
            address
        )));
    }

    Ok(address.to_string())
}

pub fn prompt_recipient<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> NewsletterResult<String> {
    write!(output, "Please enter email to send to: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    validate_recipient(&line)
}
