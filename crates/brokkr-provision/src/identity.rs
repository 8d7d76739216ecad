//! SSH identity setup
//!
//! The credential step is idempotent by construction: an existing key is
//! detected and generation is skipped, but the public key is displayed on
//! every run so the operator can paste it into the forge even when
//! nothing was generated.

use camino::Utf8Path;
use owo_colors::OwoColorize;
use tracing::info;

use crate::action::ActionError;
use crate::invoker::Invoke;

/// Private key file name inside the SSH directory
pub const KEY_FILE: &str = "id_ed25519";

/// Ensure an SSH keypair exists and display the public key
///
/// Generates an ed25519 keypair under `ssh_dir` unless the private key
/// file is already present. Either way the public key is printed, which
/// is the part of this step operators actually come back for.
pub async fn ensure_ssh_identity<I: Invoke>(
    invoker: &I,
    ssh_dir: &Utf8Path,
) -> Result<(), ActionError> {
    let key_path = ssh_dir.join(KEY_FILE);

    if key_path.exists() {
        info!(key = %key_path, "existing SSH key found, skipping generation");
        println!("Existing SSH key found at {key_path}, skipping generation");
    } else {
        tokio::fs::create_dir_all(ssh_dir).await?;
        invoker
            .run(&format!(
                "ssh-keygen -t ed25519 -N '' -f {key_path} -C \"$(whoami)@$(hostname)\""
            ))
            .await?;
    }

    let pub_path = ssh_dir.join(format!("{KEY_FILE}.pub"));
    match tokio::fs::read_to_string(&pub_path).await {
        Ok(key) => {
            println!("\n{}", "Public key:".bold());
            println!("{}", key.trim());
        }
        Err(err) => {
            println!(
                "{}",
                format!("Public key not readable at {pub_path}: {err}").yellow()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::tests_support::MockInvoker;
    use camino::Utf8PathBuf;

    fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn existing_key_skips_generation_but_still_succeeds() {
        let (_guard, dir) = utf8_tempdir();
        std::fs::write(dir.join(KEY_FILE), "private").unwrap();
        std::fs::write(dir.join(format!("{KEY_FILE}.pub")), "ssh-ed25519 AAAA dev@box").unwrap();

        let invoker = MockInvoker::new();
        ensure_ssh_identity(&invoker, &dir).await.unwrap();

        assert!(invoker.commands().is_empty(), "no command should run");
    }

    #[tokio::test]
    async fn missing_key_generates_one() {
        let (_guard, dir) = utf8_tempdir();
        let invoker = MockInvoker::new();

        ensure_ssh_identity(&invoker, &dir).await.unwrap();

        let commands = invoker.commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].starts_with("ssh-keygen -t ed25519"));
        assert!(commands[0].contains(KEY_FILE));
    }

    #[tokio::test]
    async fn generation_failure_propagates() {
        let (_guard, dir) = utf8_tempdir();
        let invoker = MockInvoker::new();
        invoker.fail_matching("ssh-keygen", 1);

        let err = ensure_ssh_identity(&invoker, &dir).await.unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
    }
}
