//! Shell completion and man page generation.

use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;

use crate::Cli;

const BIN_NAME: &str = "showcase";

fn completion_script(shell: clap_complete::Shell) -> Vec<u8> {
    let mut command = Cli::command();
    let mut out = Vec::new();
    clap_complete::generate(shell, &mut command, BIN_NAME, &mut out);
    out
}

fn render_man_page() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    clap_mangen::Man::new(Cli::command()).render(&mut out)?;
    Ok(out)
}

pub(crate) fn handle_completions(
    shell: clap_complete::Shell,
) -> Result<(), Box<dyn std::error::Error>> {
    std::io::stdout().write_all(&completion_script(shell))?;
    Ok(())
}

pub(crate) fn handle_man(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(dir) => {
            // One page per subcommand, written into the directory.
            std::fs::create_dir_all(&dir)?;
            clap_mangen::generate_to(Cli::command(), &dir)?;
            println!("man pages written to {}", dir.display());
        }
        None => {
            std::io::stdout().write_all(&render_man_page()?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    #[test]
    fn completion_scripts_mention_the_binary() {
        for shell in [clap_complete::Shell::Bash, clap_complete::Shell::Zsh] {
            let script = completion_script(shell);
            let script = String::from_utf8(script).expect("completion output should be UTF-8");
            assert!(script.contains(BIN_NAME), "{shell} completion lacks the binary name");
        }
    }

    #[test]
    fn man_page_carries_the_expected_title() {
        let page = render_man_page().expect("man rendering should succeed");
        let page = String::from_utf8(page).expect("man output should be UTF-8");
        assert!(page.to_lowercase().contains(".th showcase"));
    }

    #[test]
    fn handle_man_writes_pages_into_the_requested_directory() {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock should be after epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("showcase-man-test-{nonce}"));

        handle_man(Some(dir.clone())).expect("man page generation should succeed");

        let entries = std::fs::read_dir(&dir)
            .expect("output directory should exist")
            .count();
        assert!(entries > 0, "man page generation should produce files");

        std::fs::remove_dir_all(&dir).expect("test output directory should be removable");
    }
}
