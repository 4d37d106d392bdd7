//! The `init` command: seed configuration and create the workspace.

use std::path::{Path, PathBuf};

use dialoguer::Input;

use crate::cli::args::InitArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::{Config, ConfigStore, FileConfigStore};
use crate::error::Result;
use crate::ui;
use crate::workspace::{DirWorkspaceStore, WorkspaceStore};

pub struct InitCommand {
    config_root: PathBuf,
    workspace_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    pub fn new(config_root: &Path, workspace_root: &Path, args: InitArgs) -> Self {
        Self {
            config_root: config_root.to_path_buf(),
            workspace_root: workspace_root.to_path_buf(),
            args,
        }
    }

    fn resolve_handle(&self) -> Result<Option<String>> {
        if let Some(handle) = &self.args.handle {
            return Ok(Some(handle.clone()));
        }
        if !console::user_attended() {
            return Ok(None);
        }
        let entered: String = Input::new()
            .with_prompt("Judge handle (leave empty for anonymous use)")
            .allow_empty(true)
            .interact_text()
            .map_err(anyhow::Error::from)?;
        Ok((!entered.is_empty()).then_some(entered))
    }
}

impl Command for InitCommand {
    fn execute(&self) -> Result<CommandResult> {
        let store = FileConfigStore::new(&self.config_root);

        if store.get().is_some() && !self.args.force {
            ui::info("configuration already exists (use --force to overwrite)");
        } else {
            let mut seed = Config {
                handle: self.resolve_handle()?,
                ..Default::default()
            };
            if let Some(url) = &self.args.judge_url {
                seed.judge_url = url.clone();
            }
            if let Some(name) = &self.args.name {
                seed.workspace_name = name.clone();
            }
            store.init(&seed)?;
            ui::success(&format!(
                "wrote configuration to {}",
                store.config_path().display()
            ));
        }

        let config = store.get().unwrap_or_default();
        let workspace = DirWorkspaceStore::new(&self.workspace_root);
        workspace.init(&config.workspace_name, &store.get_handle())?;
        ui::success(&format!(
            "workspace '{}' ready at {}",
            config.workspace_name,
            self.workspace_root.display()
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args() -> InitArgs {
        InitArgs {
            handle: Some("tourist".into()),
            name: None,
            judge_url: None,
            force: false,
        }
    }

    #[test]
    fn init_creates_config_and_workspace() {
        let temp = TempDir::new().unwrap();
        let config_root = temp.path().join("cfg");
        let workspace_root = temp.path().join("ws");

        let cmd = InitCommand::new(&config_root, &workspace_root, args());
        let result = cmd.execute().unwrap();
        assert!(result.success);

        let store = FileConfigStore::new(&config_root);
        assert_eq!(store.get_handle(), "tourist");
        assert!(DirWorkspaceStore::new(&workspace_root).exists());
    }

    #[test]
    fn init_without_force_keeps_existing_config() {
        let temp = TempDir::new().unwrap();
        let config_root = temp.path().join("cfg");
        let workspace_root = temp.path().join("ws");

        InitCommand::new(&config_root, &workspace_root, args())
            .execute()
            .unwrap();

        let mut second = args();
        second.handle = Some("petr".into());
        InitCommand::new(&config_root, &workspace_root, second)
            .execute()
            .unwrap();

        let store = FileConfigStore::new(&config_root);
        assert_eq!(store.get_handle(), "tourist");
    }

    #[test]
    fn init_with_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let config_root = temp.path().join("cfg");
        let workspace_root = temp.path().join("ws");

        InitCommand::new(&config_root, &workspace_root, args())
            .execute()
            .unwrap();

        let mut second = args();
        second.handle = Some("petr".into());
        second.force = true;
        second.judge_url = Some("https://other.judge".into());
        InitCommand::new(&config_root, &workspace_root, second)
            .execute()
            .unwrap();

        let store = FileConfigStore::new(&config_root);
        assert_eq!(store.get_handle(), "petr");
        assert_eq!(store.get().unwrap().judge_url, "https://other.judge");
    }
}
