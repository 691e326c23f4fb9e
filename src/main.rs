mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::FundLensApp;
use eframe::egui;
use state::AppState;

/// Source dataset. Read once at startup; a refresh requires a restart.
const DATA_PATH: &str = "assets/managers_profit_ayp.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = Path::new(DATA_PATH);
    let table = data::loader::load(path).with_context(|| format!("loading {DATA_PATH}"))?;
    let updated_on = data::loader::source_mtime(path)?;
    log::info!(
        "loaded {} managers, data updated {updated_on}",
        table.len()
    );

    let state = AppState::new(table, updated_on);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FundLens – Manager Performance",
        options,
        Box::new(move |cc| {
            install_cjk_font(&cc.egui_ctx);
            Ok(Box::new(FundLensApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running event loop: {e}"))?;
    Ok(())
}

/// Manager names are CJK text, which egui's bundled fonts cannot render.
/// Append the first system CJK font found as a fallback; without one the
/// app still runs, names just show as placeholders.
fn install_cjk_font(ctx: &egui::Context) {
    const CANDIDATES: [&str; 5] = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        "/System/Library/Fonts/PingFang.ttc",
        "C:\\Windows\\Fonts\\msyh.ttc",
    ];

    let Some((path, bytes)) = CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
    else {
        log::warn!("no system CJK font found, manager names will not render");
        return;
    };
    log::info!("using CJK font {path}");

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes).into());
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
}
