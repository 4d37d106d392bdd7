//! The `doctor` command: full diagnostics or a quick readiness probe.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cancel::CancelToken;
use crate::cli::args::DoctorArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::{ConfigStore, FileConfigStore};
use crate::doctor::checks::{
    ConfigCheck, CredentialsCheck, PingCheck, SchemaCheck, SessionExpiryCheck, StructureCheck,
    WorkspaceCheck,
};
use crate::doctor::{CheckContext, Checker, Status};
use crate::error::Result;
use crate::remote::{HttpRemoteClient, PageStructureVerifier};
use crate::ui;
use crate::workspace::DirWorkspaceStore;

pub struct DoctorCommand {
    config_root: PathBuf,
    workspace_root: PathBuf,
    args: DoctorArgs,
}

impl DoctorCommand {
    pub fn new(config_root: &Path, workspace_root: &Path, args: DoctorArgs) -> Self {
        Self {
            config_root: config_root.to_path_buf(),
            workspace_root: workspace_root.to_path_buf(),
            args,
        }
    }

    /// Assemble the checker: internal checks first, then — unless running
    /// offline — the checks that talk to the judge.
    fn build_checker(&self) -> Result<Checker> {
        let config_store = Arc::new(FileConfigStore::new(&self.config_root));
        let workspace_store = Arc::new(DirWorkspaceStore::new(&self.workspace_root));
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

        if !self.args.offline {
            let client = Arc::new(HttpRemoteClient::new(&config.judge_url)?);
            let verifier = Arc::new(PageStructureVerifier::new(&config.judge_url)?);
            checker.register(Box::new(PingCheck::new(client)));
            checker.register(Box::new(StructureCheck::new(verifier)));
            checker.register(Box::new(SessionExpiryCheck::new(config_store)));
        }

        Ok(checker)
    }
}

impl Command for DoctorCommand {
    fn execute(&self) -> Result<CommandResult> {
        let checker = self.build_checker()?;
        let ctx = CheckContext::new(CancelToken::new());

        if self.args.quick {
            let ready = checker.quick_check(&ctx);
            if ready {
                ui::success("ready");
                return Ok(CommandResult::success());
            }
            ui::error("not ready — run `dojo doctor` for details");
            return Ok(CommandResult::failure(2));
        }

        let spinner = (!self.args.json && console::user_attended()).then(ui::doctor_spinner);
        let report = checker.run(&ctx);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?);
        } else {
            print!("{}", ui::render_report(&report));
        }

        let exit_code = match report.overall {
            Status::Healthy => 0,
            Status::Degraded => 1,
            Status::Critical => 2,
        };
        if exit_code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(exit_code))
        }
    }
}
