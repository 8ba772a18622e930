use cnapp_dashboard::dashboard::{seed, DashboardStore};
use cnapp_dashboard::gui::DashboardApp;
use cnapp_dashboard::logging;
use cnapp_dashboard::settings::{Settings, SETTINGS_FILE};

use eframe::egui;

struct Args {
    settings_path: String,
    dump_seed: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        settings_path: SETTINGS_FILE.to_string(),
        dump_seed: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings_path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--settings requires a path"))?;
            }
            "--dump-seed" => args.dump_seed = true,
            other => anyhow::bail!("unknown argument '{other}'"),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    let settings = match Settings::load(&args.settings_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to read {}: {e}; using defaults", args.settings_path);
            Settings::default()
        }
    };
    logging::init(settings.debug_logging, settings.log_file.clone());

    if args.dump_seed {
        println!("{}", serde_json::to_string_pretty(&seed::initial_data())?);
        return Ok(());
    }

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    tracing::info!(settings = %args.settings_path, "starting dashboard");
    eframe::run_native(
        "CNAPP Dashboard",
        native_options,
        Box::new(move |cc| {
            Box::new(DashboardApp::new(
                &cc.egui_ctx,
                DashboardStore::default(),
                &settings,
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
