//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure random password generator written in Rust.

use anyhow::Result;
use clap::Parser;

use rpawogen::commands;
use rpawogen::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A secure random password generator written in Rust", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Adjust options interactively, regenerating on every change
    Interactive {
        /// Seconds before a copied password is cleared from the clipboard
        #[arg(short = 't', long, default_value_t = setclip::DEFAULT_CLEAR_SECS)]
        timeout: u64,
    },
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (a minimum of 12 is always enforced)
    #[arg(short, long, default_value_t = 12)]
    length: usize,

    /// Include numbers
    #[arg(short = 'n', long, default_value_t = false)]
    numbers: bool,

    /// Include special characters
    #[arg(short = 's', long, default_value_t = false)]
    symbols: bool,

    /// Copy the password to the clipboard instead of printing it
    #[arg(short = 'c', long, default_value_t = false)]
    copy: bool,

    /// Seconds before a copied password is cleared from the clipboard
    #[arg(short = 't', long, default_value_t = setclip::DEFAULT_CLEAR_SECS)]
    timeout: u64,
}

fn main() -> Result<()> {
    // 剪贴板清理守护进程重入：由 setclip 拉起的子进程不带命令行参数，
    // 必须在参数解析之前处理
    if setclip::is_daemon() {
        return setclip::run_daemon();
    }

    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => commands::r#gen::generate_random(
            args.length,
            args.numbers,
            args.symbols,
            args.copy,
            args.timeout,
        ),
        Cli::Interactive { timeout } => commands::interactive::run(timeout),
    }
}
