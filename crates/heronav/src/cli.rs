//! CLI commands for inspecting the header
//!
//! Provides menu, render, and simulate commands on top of heronav-core.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use heronav_core::markup::{self, describe_style};
use heronav_core::view::{BarItem, LayoutBody, PanelLayout};
use heronav_core::{
    HeaderConfig, HeaderInstance, HeaderLayout, HeaderView, PanelState, Presentation,
    ScrollProgressObserver, ScrollSignal,
};
use std::rc::Rc;

/// Output format for `render`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Text,
    Json,
    Html,
}

fn new_table(headers: &[&str], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Apply colors only if enabled
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
    table
}

// ============================================================================
// Menu
// ============================================================================

pub fn run_menu(config: &HeaderConfig, json: bool, no_color: bool) -> Result<()> {
    let content = config.content().context("Invalid menu")?;

    if json {
        let out = serde_json::to_string_pretty(content.menu.entries())
            .context("Failed to serialize menu")?;
        println!("{}", out);
        return Ok(());
    }

    let mut table = new_table(&["#", "Entry", "Href", "Children"], no_color);
    for (i, entry) in content.menu.entries().iter().enumerate() {
        let children = entry
            .children
            .iter()
            .map(|c| format!("{} ({})", c.name, c.href))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.name),
            Cell::new(&entry.href),
            Cell::new(if children.is_empty() { "-".to_string() } else { children }),
        ]);
    }
    println!("{table}");
    Ok(())
}

// ============================================================================
// Render
// ============================================================================

pub fn run_render(
    config: &HeaderConfig,
    width: u32,
    scroll: f64,
    open: bool,
    format: RenderFormat,
) -> Result<()> {
    let layout = layout_for(config, width, scroll, open)?;

    match format {
        RenderFormat::Html => println!("{}", markup::render_html(&layout)),
        RenderFormat::Json => {
            let out = serde_json::to_string_pretty(&layout)
                .context("Failed to serialize layout")?;
            println!("{}", out);
        }
        RenderFormat::Text => print!("{}", describe_layout(&layout)),
    }
    Ok(())
}

fn layout_for(config: &HeaderConfig, width: u32, scroll: f64, open: bool) -> Result<HeaderLayout> {
    let content = config.content().context("Invalid menu")?;
    let progress = heronav_core::scroll::normalize_fraction(scroll).unwrap_or(0.0);
    let presentation = Presentation::for_width(width, config.breakpoint_px);

    Ok(HeaderView::new(&content).render(
        config.elevation.is_elevated(progress),
        PanelState::from_open(open),
        presentation,
    ))
}

/// Indented plain-text outline of a layout
pub fn describe_layout(layout: &HeaderLayout) -> String {
    let mut out = String::new();
    out.push_str(&format!("style: {}\n", describe_style(layout.style)));
    out.push_str(&format!("home: {} [{}]\n", layout.home.href, layout.home.label));

    match &layout.body {
        LayoutBody::Wide { items, actions } => {
            out.push_str("presentation: wide\n");
            for item in items {
                describe_bar_item(&mut out, item);
            }
            for action in actions {
                out.push_str(&format!("  [{}] -> {}\n", action.label, action.href));
            }
        }
        LayoutBody::Narrow { toggle, panel } => {
            out.push_str("presentation: narrow\n");
            out.push_str(&format!(
                "toggle: \"{}\" (expanded: {})\n",
                toggle.label, toggle.expanded
            ));
            match panel {
                Some(panel) => describe_panel(&mut out, panel),
                None => out.push_str("panel: hidden\n"),
            }
        }
    }
    out
}

fn describe_bar_item(out: &mut String, item: &BarItem) {
    let marker = if item.has_chevron() { " v" } else { "" };
    out.push_str(&format!("  {}{} -> {}\n", item.name, marker, item.href));
    if let Some(submenu) = &item.submenu {
        for link in &submenu.links {
            out.push_str(&format!("      (hover) {} -> {}\n", link.name, link.href));
        }
    }
}

fn describe_panel(out: &mut String, panel: &PanelLayout) {
    out.push_str("panel: open\n");
    for item in &panel.items {
        out.push_str(&format!("  {} -> {}\n", item.name, item.href));
        for child in &item.children {
            out.push_str(&format!("    {} -> {}\n", child.name, child.href));
        }
    }
    for action in &panel.actions {
        out.push_str(&format!("  [{}] -> {}\n", action.label, action.href));
    }
}

// ============================================================================
// Simulate
// ============================================================================

/// Elevation observed after one scroll sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationStep {
    pub sample: f64,
    pub progress: f64,
    pub elevated: bool,
}

/// Mount a header on a scripted scroll signal and record each step
pub fn simulate(config: &HeaderConfig, samples: &[f64]) -> Result<Vec<SimulationStep>> {
    let content = config.content().context("Invalid menu")?;
    let signal = ScrollSignal::new();
    let observer = ScrollProgressObserver::new(Rc::new(signal.clone()));
    let header = HeaderInstance::mount(content, config.elevation, &observer);

    let steps = samples
        .iter()
        .map(|&sample| {
            signal.set(sample);
            SimulationStep {
                sample,
                progress: observer.latest(),
                elevated: header.is_elevated(),
            }
        })
        .collect();

    header.unmount();
    Ok(steps)
}

pub fn run_simulate(
    config: &HeaderConfig,
    samples: &[f64],
    json: bool,
    no_color: bool,
) -> Result<()> {
    let steps = simulate(config, samples)?;

    if json {
        let flags: Vec<bool> = steps.iter().map(|s| s.elevated).collect();
        println!("{}", serde_json::to_string(&flags)?);
        return Ok(());
    }

    let mut table = new_table(&["Step", "Sample", "Progress", "Elevated"], no_color);
    for (i, step) in steps.iter().enumerate() {
        let elevated = if no_color {
            Cell::new(step.elevated)
        } else if step.elevated {
            Cell::new("true").fg(Color::Green)
        } else {
            Cell::new("false").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:.3}", step.sample)),
            Cell::new(format!("{:.3}", step.progress)),
            elevated,
        ]);
    }
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_scenario() {
        let steps = simulate(&HeaderConfig::default(), &[0.0, 0.03, 0.06, 0.04]).unwrap();
        let flags: Vec<bool> = steps.iter().map(|s| s.elevated).collect();
        assert_eq!(flags, vec![false, false, true, false]);
    }

    #[test]
    fn test_simulate_clamps_samples() {
        let steps = simulate(&HeaderConfig::default(), &[3.0]).unwrap();
        assert_eq!(steps[0].progress, 1.0);
        assert!(steps[0].elevated);
    }

    #[test]
    fn test_layout_for_uses_breakpoint() {
        let config = HeaderConfig::default();
        let wide = layout_for(&config, 1024, 0.0, false).unwrap();
        assert!(matches!(wide.body, LayoutBody::Wide { .. }));
        let narrow = layout_for(&config, 1023, 0.0, true).unwrap();
        assert_eq!(narrow.toggle().unwrap().label, "Close Menu");
    }

    #[test]
    fn test_describe_layout_narrow_closed() {
        let layout = layout_for(&HeaderConfig::default(), 400, 0.5, false).unwrap();
        let text = describe_layout(&layout);
        assert!(text.contains("style: elevated"));
        assert!(text.contains("toggle: \"Open Menu\" (expanded: false)"));
        assert!(text.contains("panel: hidden"));
    }
}
