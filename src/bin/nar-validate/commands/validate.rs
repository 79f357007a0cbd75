//! `nar-validate validate` command

use anyhow::Result;

use crate::cli::ValidateArgs;
use nar_validate::ops::{format_report_for_output, validate, OutputFormat};
use nar_validate::util::diagnostic::{self, suggestions, Diagnostic};
use nar_validate::util::GlobalContext;

pub fn execute(args: ValidateArgs, ctx: &GlobalContext) -> Result<()> {
    let output_format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let project = match ctx.load_project() {
        Ok(project) => project,
        Err(e) => {
            let diag = Diagnostic::error(format!("{:#}", e))
                .with_suggestion(suggestions::NO_DESCRIPTOR);
            diagnostic::emit(&diag, ctx.color());
            std::process::exit(1);
        }
    };

    let config = ctx.load_config(project.root());

    match validate(&project, &config) {
        Ok(report) => {
            for warning in &report.warnings {
                diagnostic::emit(&Diagnostic::warning(warning.as_str()), ctx.color());
            }
            print!(
                "{}",
                format_report_for_output(&report, output_format, ctx.is_verbose())
            );
            Ok(())
        }
        Err(e) => {
            let mut diag = e.to_diagnostic();
            if !ctx.is_verbose() {
                diag = diag.with_suggestion(suggestions::RUN_VERBOSE);
            }
            diagnostic::emit(&diag, ctx.color());
            std::process::exit(1);
        }
    }
}
