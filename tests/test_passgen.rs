use rpawogen::passgen::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_password_default_options() {
        let options = PasswordOptions::default();
        let password = generate_password(&options).unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_minimum_length_floor() {
        for length in [1, 5, 8, 11, 12] {
            let options = PasswordOptions {
                length,
                ..Default::default()
            };
            let password = generate_password(&options).unwrap();
            assert_eq!(password.len(), 12, "length {} should floor to 12", length);
        }
    }

    #[test]
    fn test_length_above_floor_is_kept() {
        for length in [13, 20, 64, 100] {
            let options = PasswordOptions {
                length,
                ..Default::default()
            };
            let password = generate_password(&options).unwrap();
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_letters_only_without_flags() {
        let options = PasswordOptions {
            length: 40,
            include_numbers: false,
            include_special: false,
        };
        let password = generate_password(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_password_chars_are_in_charset() {
        let options = PasswordOptions {
            length: 64,
            include_numbers: true,
            include_special: true,
        };
        let charset = build_charset(&options);
        let password = generate_password(&options).unwrap();
        for c in password.chars() {
            assert!(charset.contains(&c), "character {:?} not in charset", c);
        }
    }

    #[test]
    fn test_numbers_flag_excludes_specials() {
        let options = PasswordOptions {
            length: 40,
            include_numbers: true,
            include_special: false,
        };
        let password = generate_password(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_charset_sizes() {
        let base = PasswordOptions::default();
        assert_eq!(charset_size(&base), 52);

        let with_numbers = PasswordOptions {
            include_numbers: true,
            ..base
        };
        assert_eq!(charset_size(&with_numbers), 62);

        let with_special = PasswordOptions {
            include_special: true,
            ..base
        };
        assert_eq!(charset_size(&with_special), 76);

        let all = PasswordOptions {
            include_numbers: true,
            include_special: true,
            ..base
        };
        assert_eq!(charset_size(&all), 86);
    }

    #[test]
    fn test_charset_size_matches_built_pool() {
        for (numbers, special) in [(false, false), (true, false), (false, true), (true, true)] {
            let options = PasswordOptions {
                length: 12,
                include_numbers: numbers,
                include_special: special,
            };
            assert_eq!(build_charset(&options).len(), charset_size(&options));
        }
    }

    #[test]
    fn test_charset_order_is_deterministic() {
        let options = PasswordOptions {
            length: 12,
            include_numbers: true,
            include_special: true,
        };
        let first = build_charset(&options);
        let second = build_charset(&options);
        assert_eq!(first, second);

        // Letters first, then digits, then specials, append-only.
        assert!(first[..52].iter().all(|c| c.is_ascii_alphabetic()));
        assert!(first[52..62].iter().all(|c| c.is_ascii_digit()));
        assert!(first[62..].iter().all(|c| !c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_zero_length_is_invalid() {
        let options = PasswordOptions {
            length: 0,
            include_numbers: true,
            include_special: true,
        };
        let result = generate_password(&options);
        assert!(matches!(result, Err(PassgenError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_consecutive_passwords_differ() {
        let options = PasswordOptions {
            length: 32,
            ..Default::default()
        };
        let first = generate_password(&options).unwrap();
        let second = generate_password(&options).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_effective_length() {
        assert_eq!(effective_length(1), 12);
        assert_eq!(effective_length(12), 12);
        assert_eq!(effective_length(13), 13);
        assert_eq!(effective_length(100), 100);
    }

    #[test]
    fn test_entropy_bits_for_base_alphabet() {
        let options = PasswordOptions::default();
        // 12 characters over 52 symbols: 12 * log2(52) ≈ 68.4 bits
        let bits = entropy_bits(&options);
        assert!((bits - 68.405).abs() < 0.01, "unexpected entropy: {}", bits);
    }

    #[test]
    fn test_scenario_short_letters_only() {
        let options = PasswordOptions {
            length: 8,
            include_numbers: false,
            include_special: false,
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.len(), 12);
        assert_eq!(charset_size(&options), 52);
    }

    #[test]
    fn test_scenario_long_full_charset() {
        let options = PasswordOptions {
            length: 20,
            include_numbers: true,
            include_special: true,
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.len(), 20);
        assert_eq!(charset_size(&options), 86);
    }
}
