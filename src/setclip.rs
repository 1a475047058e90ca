//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-20
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use std::{env, process, thread, time::Duration};
use zeroize::Zeroize;

/// 剪贴板自动清理的默认等待时间（秒）
pub const DEFAULT_CLEAR_SECS: u64 = 45;

const ENV_DAEMON: &str = "RPAWOGEN_CLIP_DAEMON";
const ENV_SECRET: &str = "RPAWOGEN_CLIP_SECRET";
const ENV_CLEAR_SECS: &str = "RPAWOGEN_CLIP_SECS";

/// Copy a secret to the system clipboard and spawn a detached daemon
/// that clears it after `clear_secs` seconds if still untouched.
pub fn copy_to_clipboard(secret: &str, clear_secs: u64) -> Result<()> {
    let mut ctx = Clipboard::new().context("Failed to initialize clipboard")?;
    ctx.set_text(secret)
        .context("Failed to write to clipboard")?;
    spawn_daemon(secret, clear_secs)
}

/// 子进程是否作为清理守护进程被拉起
pub fn is_daemon() -> bool {
    env::var(ENV_DAEMON).is_ok()
}

/// Daemon re-entry point; must run before command-line parsing since
/// the spawned copy carries no arguments.
pub fn run_daemon() -> Result<()> {
    let mut secret =
        env::var(ENV_SECRET).map_err(|_| anyhow!("Missing {} for clipboard daemon", ENV_SECRET))?;
    let clear_secs = env::var(ENV_CLEAR_SECS)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CLEAR_SECS);

    let result = daemon_task(&secret, clear_secs);
    secret.zeroize();
    result
}

fn spawn_daemon(secret: &str, clear_secs: u64) -> Result<()> {
    let exe_path = env::current_exe().context("Failed to locate current executable")?;

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(ENV_DAEMON, "1")
            .env(ENV_SECRET, secret) // 通过环境变量传递待清理内容
            .env(ENV_CLEAR_SECS, clear_secs.to_string())
            .stdout(process::Stdio::null())
            .stderr(process::Stdio::inherit())
            .process_group(0);

        cmd.spawn().context("Failed to spawn clipboard daemon")?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(ENV_DAEMON, "1")
            .env(ENV_SECRET, secret) // 通过环境变量传递待清理内容
            .env(ENV_CLEAR_SECS, clear_secs.to_string())
            .stderr(process::Stdio::inherit())
            .creation_flags(0x08000000); // CREATE_NO_WINDOW

        cmd.spawn().context("Failed to spawn clipboard daemon")?;
    }

    Ok(())
}

fn daemon_task(secret: &str, clear_secs: u64) -> Result<()> {
    // 等待指定时间(秒)
    thread::sleep(Duration::from_secs(clear_secs));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("[clip-daemon] clipboard unavailable: {}", e);
            return Ok(());
        }
    };

    let mut current = ctx.get_text().unwrap_or_default();

    // 剪贴板内容被其他程序覆盖时不做任何操作
    if current == secret {
        if let Err(e) = ctx.set_text("") {
            eprintln!("[clip-daemon] failed to clear clipboard: {}", e);
        }
    }
    current.zeroize();

    Ok(())
}
