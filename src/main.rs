use clap::Parser;
use vhost_clone::domain::model::ProvisionPlan;
use vhost_clone::utils::logger;
use vhost_clone::{CliArgs, LocalStore, ProvisionError, Provisioner};

fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose, args.json);

    tracing::info!("Beginning the script execution");
    tracing::debug!("CLI args: {:?}", args);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let provisioner = Provisioner::new(LocalStore::new(), config);
    let config = provisioner.config();
    tracing::info!("Current folder name is: {}", config.source);
    tracing::info!("New folder name is: {}", config.destination);
    tracing::debug!(
        "Content root [{}], configuration root [{}], existing conf files: {:?}",
        config.content_root.display(),
        config.config_root.display(),
        config.on_existing_conf
    );

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be copied or rewritten");
        let plan = provisioner.plan();
        display_plan(&plan, args.json);
        if !plan.source_dir_exists {
            fail(ProvisionError::SourceNotFound {
                path: plan.source_dir,
            });
        }
        return;
    }

    match provisioner.run() {
        Ok(report) => {
            let written = report
                .conf_files
                .iter()
                .filter(|c| c.outcome.wrote_file())
                .count();
            tracing::info!(
                "New site [{}] ready: {} of {} conf files written",
                report.destination,
                written,
                report.conf_files.len()
            );
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => tracing::error!("Failed to serialize report: {}", e),
                }
            }
            tracing::info!("Script has finished its execution");
        }
        Err(e) => fail(e),
    }
}

fn fail(e: ProvisionError) -> ! {
    tracing::error!(
        "❌ Provisioning failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("ERROR: {}", e.user_friendly_message());
    eprintln!("ERROR: Aborting the execution..!");

    std::process::exit(e.exit_code().max(1));
}

fn display_plan(plan: &ProvisionPlan, json: bool) {
    if json {
        match serde_json::to_string_pretty(plan) {
            Ok(out) => println!("{}", out),
            Err(e) => tracing::error!("Failed to serialize plan: {}", e),
        }
        return;
    }

    let mark = |exists: bool| if exists { "exists" } else { "missing" };
    println!(
        "copy   {} ({}) -> {} ({})",
        plan.source_dir.display(),
        mark(plan.source_dir_exists),
        plan.destination_dir.display(),
        mark(plan.destination_dir_exists)
    );
    for conf in &plan.conf_files {
        println!(
            "{:<6} {} ({}) -> {} ({}, on existing: {:?})",
            conf.kind.label(),
            conf.source.display(),
            mark(conf.source_exists),
            conf.destination.display(),
            mark(conf.destination_exists),
            plan.on_existing_conf
        );
    }
}
