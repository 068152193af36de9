//! # Rendering Module
//!
//! Turns a [`CmdResult`] into terminal text. Each section of the result gets
//! its own renderer; [`render_result`] stacks the non-empty ones in a fixed
//! order with messages last.
//!
//! Renderers take `use_color`: `None` leaves color detection to `console`,
//! `Some(_)` forces it on or off. Tests force it off.

use super::styles;
use console::Style;
use solidapp::catalog::Product;
use solidapp::commands::{CmdMessage, CmdResult, MessageLevel};
use solidapp::config::SolidConfig;
use solidapp::devices::DeviceAction;
use solidapp::journal::JournalEntry;
use solidapp::shapes::AreaReport;
use unicode_width::UnicodeWidthStr;

fn apply(style: Style, use_color: Option<bool>) -> Style {
    match use_color {
        Some(color) => style.force_styling(color),
        None => style,
    }
}

pub fn render_result(result: &CmdResult) -> String {
    render_result_internal(result, None)
}

fn render_result_internal(result: &CmdResult, use_color: Option<bool>) -> String {
    let mut sections = Vec::new();
    if !result.listed_products.is_empty() {
        sections.push(render_products_internal(&result.listed_products, use_color));
    }
    if !result.journal_entries.is_empty() {
        sections.push(render_journal_internal(&result.journal_entries, use_color));
    }
    if !result.area_reports.is_empty() {
        sections.push(render_area_reports_internal(&result.area_reports, use_color));
    }
    if !result.device_actions.is_empty() {
        sections.push(render_device_actions(&result.device_actions));
    }
    if let Some(config) = &result.config {
        sections.push(render_config_internal(config, use_color));
    }
    if !result.messages.is_empty() {
        sections.push(render_messages_internal(&result.messages, use_color));
    }
    sections.join("\n")
}

fn render_products_internal(products: &[Product], use_color: Option<bool>) -> String {
    // Display columns, not bytes: names may hold accented or wide characters.
    let name_width = products.iter().map(|p| p.name().width()).max().unwrap_or(0);
    let mut output = String::new();
    for (i, product) in products.iter().enumerate() {
        let index = apply(styles::index(), use_color).apply_to(format!("{:>2}.", i + 1));
        let padding = " ".repeat(name_width - product.name().width());
        let name = apply(styles::title(), use_color)
            .apply_to(format!("{}{}", product.name(), padding));
        let color = apply(styles::product_color(product.color()), use_color)
            .apply_to(format!("{:<5}", product.color().as_str()));
        let size = apply(styles::muted(), use_color).apply_to(product.size());
        output.push_str(&format!("{} {}  {}  {}\n", index, name, color, size));
    }
    output
}

fn render_journal_internal(entries: &[JournalEntry], use_color: Option<bool>) -> String {
    let mut output = String::new();
    for entry in entries {
        let seq = apply(styles::index(), use_color).apply_to(format!("{}:", entry.seq));
        output.push_str(&format!("{} {}\n", seq, entry.text));
    }
    output
}

fn render_area_reports_internal(reports: &[AreaReport], use_color: Option<bool>) -> String {
    let mut output = String::new();
    for report in reports {
        let verdict = if report.is_consistent() {
            apply(styles::ok(), use_color).apply_to("ok")
        } else {
            apply(styles::violation(), use_color).apply_to("violation")
        };
        output.push_str(&format!(
            "{:<10} expected area {:>3}, got {:>3}  {}\n",
            report.shape, report.expected, report.actual, verdict
        ));
    }
    output
}

fn render_device_actions(actions: &[DeviceAction]) -> String {
    actions.iter().map(|a| format!("{}\n", a)).collect()
}

fn render_config_internal(config: &SolidConfig, use_color: Option<bool>) -> String {
    let key = apply(styles::title(), use_color);
    let catalog = config
        .catalog_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in sample)".to_string());
    format!(
        "{} = {}\n{} = {}\n{} = {}\n",
        key.apply_to("journal_file"),
        config.journal_file,
        key.apply_to("output_dir"),
        config.output_dir.display(),
        key.apply_to("catalog_file"),
        catalog
    )
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    let mut output = String::new();
    for message in messages {
        let prefix = match message.level {
            MessageLevel::Warning => "warning: ",
            MessageLevel::Info | MessageLevel::Success => "",
        };
        let line = apply(styles::message(message.level), use_color)
            .apply_to(format!("{}{}", prefix, message.content));
        output.push_str(&format!("{}\n", line));
    }
    output
}
