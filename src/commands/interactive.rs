use anyhow::{Context, Result};
use std::io::{self, Write};
use zeroize::Zeroize;

use crate::passgen::{self, PasswordOptions};
use crate::setclip;

/// Interactive panel: holds the current options and regenerates the
/// password on every change, the same way a form control would.
pub fn run(clear_secs: u64) -> Result<()> {
    let mut options = PasswordOptions::default();
    let mut password = passgen::generate_password(&options)?;

    println!("Interactive password panel. Every option change regenerates the password.");
    print_state(&options, &password);

    loop {
        print!("[l <n>] length  [n] numbers  [s] symbols  [g] regenerate  [c] copy  [q] quit > ");
        io::stdout().flush().context("Failed to flush output")?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            // EOF，按退出处理
            break;
        }
        let input = input.trim();

        match input {
            "" => continue,
            "q" => break,
            "n" => {
                options.include_numbers = !options.include_numbers;
                regenerate(&options, &mut password)?;
            }
            "s" => {
                options.include_special = !options.include_special;
                regenerate(&options, &mut password)?;
            }
            "g" => {
                regenerate(&options, &mut password)?;
            }
            "c" => {
                setclip::copy_to_clipboard(&password, clear_secs)
                    .context("Failed to copy password to clipboard")?;
                println!("Copied to clipboard, clears in {}s if untouched.", clear_secs);
            }
            _ => {
                if let Some(rest) = input.strip_prefix("l ") {
                    match rest.trim().parse::<usize>() {
                        Ok(n) if n > 0 => {
                            options.length = n;
                            regenerate(&options, &mut password)?;
                        }
                        _ => println!("Invalid length. Please enter a positive integer."),
                    }
                } else {
                    println!("Unknown command: {}", input);
                }
            }
        }
    }

    password.zeroize();
    Ok(())
}

fn regenerate(options: &PasswordOptions, password: &mut String) -> Result<()> {
    let mut fresh = passgen::generate_password(options)?;
    std::mem::swap(password, &mut fresh);
    fresh.zeroize(); // 旧密码不留在内存里
    print_state(options, password);
    Ok(())
}

fn print_state(options: &PasswordOptions, password: &str) {
    println!(
        "Length: {} (effective: {}) | Numbers: {} | Symbols: {} | Entropy: {:.1} bits",
        options.length,
        passgen::effective_length(options.length),
        if options.include_numbers { "on" } else { "off" },
        if options.include_special { "on" } else { "off" },
        passgen::entropy_bits(options)
    );
    println!("Password: {}", password);
}
