use anyhow::{Context, Result};
use zeroize::Zeroize;

use crate::passgen::{self, PasswordOptions};
use crate::setclip;

pub fn generate_random(
    length: usize,
    numbers: bool,
    symbols: bool,
    copy: bool,
    timeout: u64,
) -> Result<()> {
    let options = PasswordOptions {
        length,
        include_numbers: numbers,
        include_special: symbols,
    };
    let mut password =
        passgen::generate_password(&options).context("Failed to generate password")?;

    if length < passgen::MIN_LENGTH {
        println!(
            "Requested length {} is below the minimum, generating {} characters instead.",
            length,
            passgen::effective_length(length)
        );
    }

    if copy {
        setclip::copy_to_clipboard(&password, timeout)
            .context("Failed to copy password to clipboard")?;
        println!("Copied to clipboard, clears in {}s if untouched.", timeout);
    } else {
        println!("Generated password: {}", password);
    }
    println!(
        "Charset size: {} characters, entropy: {:.1} bits",
        passgen::charset_size(&options),
        passgen::entropy_bits(&options)
    );

    password.zeroize();
    Ok(())
}
