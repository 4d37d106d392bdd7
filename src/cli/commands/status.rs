//! The `status` command: configuration summary plus a local readiness probe.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cancel::CancelToken;
use crate::cli::args::StatusArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::{ConfigStore, FileConfigStore};
use crate::doctor::checks::{ConfigCheck, CredentialsCheck, SchemaCheck, WorkspaceCheck};
use crate::doctor::{CheckContext, Checker};
use crate::error::Result;
use crate::remote::Session;
use crate::ui;
use crate::workspace::{DirWorkspaceStore, WorkspaceStore};

pub struct StatusCommand {
    config_root: PathBuf,
    workspace_root: PathBuf,
    #[allow(dead_code)]
    args: StatusArgs,
}

impl StatusCommand {
    pub fn new(config_root: &Path, workspace_root: &Path, args: StatusArgs) -> Self {
        Self {
            config_root: config_root.to_path_buf(),
            workspace_root: workspace_root.to_path_buf(),
            args,
        }
    }

    /// Readiness over local state only; remote checks belong to `doctor`.
    fn local_checker(
        &self,
        config_store: Arc<FileConfigStore>,
        workspace_store: Arc<DirWorkspaceStore>,
    ) -> Checker {
        let config = config_store.get().unwrap_or_default();
        let mut checker = Checker::new();
        checker.register(Box::new(ConfigCheck::new(config_store.clone())));
        checker.register(Box::new(CredentialsCheck::new(config_store.clone())));
        checker.register(Box::new(WorkspaceCheck::new(
            workspace_store.clone(),
            &config.workspace_name,
            &config_store.get_handle(),
        )));
        checker.register(Box::new(SchemaCheck::new(workspace_store)));
        checker
    }
}

impl Command for StatusCommand {
    fn execute(&self) -> Result<CommandResult> {
        let config_store = Arc::new(FileConfigStore::new(&self.config_root));
        let workspace_store = Arc::new(DirWorkspaceStore::new(&self.workspace_root));

        match config_store.get() {
            Some(config) => {
                ui::info(&format!("config:    {}", config_store.config_path().display()));
                ui::info(&format!(
                    "handle:    {}",
                    config.handle.as_deref().unwrap_or("(not set)")
                ));
                ui::info(&format!("judge:     {}", config.judge_url));

                let session = config_store
                    .load_credentials()
                    .map(|creds| Session::from_credentials(&creds))
                    .unwrap_or_else(|_| Session::anonymous());
                let session_state = if session.is_authenticated() {
                    "authenticated"
                } else {
                    "anonymous"
                };
                ui::info(&format!("session:   {session_state}"));
            }
            None => ui::info("config:    (none — run `dojo init`)"),
        }

        if workspace_store.exists() {
            let schema = workspace_store
                .schema_version()
                .unwrap_or_else(|_| "(unreadable)".to_string());
            ui::info(&format!(
                "workspace: {} (schema {})",
                self.workspace_root.display(),
                schema
            ));
        } else {
            ui::info("workspace: (none)");
        }

        let checker = self.local_checker(config_store, workspace_store);
        let ctx = CheckContext::new(CancelToken::new());
        if checker.quick_check(&ctx) {
            ui::success("ready");
            Ok(CommandResult::success())
        } else {
            ui::error("not ready — run `dojo doctor`");
            Ok(CommandResult::failure(2))
        }
    }
}
