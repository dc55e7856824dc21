//! Report rendering.
//!
//! Pure formatting over a `TopologyReport`: every number printed is read
//! straight off the report. Slots are numbered from 1 in report order, so
//! `Slot 1` is always the riskiest range.

use std::fmt::Write;

use analysis::{RangeReport, TopologyReport};

use crate::table::Table;

const RULE: &str = "-------";

/// Serialize the report verbatim as pretty JSON.
pub fn render_raw(report: &TopologyReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Human readable summary: overview, per-host table, per-slot statuses.
pub fn render_text(report: &TopologyReport) -> String {
    if !report.is_success() {
        return "Failed finding cluster status. There may be something wrong with the cluster.\n"
            .to_string();
    }

    let ranges = report.ranges();
    if ranges.is_empty() {
        return "No stats were found for this cluster? Weird.\n".to_string();
    }

    let mut out = String::new();
    section(&mut out, "Overview", &render_overview(report));
    out.push('\n');
    section(&mut out, "Slots by Host", &render_by_host(ranges));
    out.push('\n');
    section(&mut out, "Slot Statuses", &render_statuses(ranges));
    out
}

fn section(out: &mut String, title: &str, body: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(body);
}

fn render_overview(report: &TopologyReport) -> String {
    let mut out = String::new();
    match report.worst_risk() {
        Some(risk) if risk == 0.0 => out.push_str(
            "Looks like your cluster is evenly distributed, and no host contains more than one instance of a hash slot\n",
        ),
        Some(risk) if risk == 1.0 => {
            let _ = writeln!(
                out,
                "Oh no, looks like {} of your hash slots are in risk of single node failure!",
                report.fully_exposed_count()
            );
        }
        _ => {}
    }

    let mut table = Table::new([
        "Slot Number",
        "Number of Hosts",
        "Maximum on One Host",
        "Hosts",
        "Master Id",
        "Master Address",
        "Slots",
    ]);
    for (idx, range) in report.ranges().iter().enumerate() {
        table.push_row([
            (idx + 1).to_string(),
            range.host_count.to_string(),
            range.max_nodes_on_one_host.to_string(),
            range.host_allocation.hosts().collect::<Vec<_>>().join(", "),
            range.primary.id.to_string(),
            range.primary.address.clone(),
            range
                .range
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ]);
    }
    out.push_str(&table.render());
    out
}

/// One row per host (first-seen order), one column per slot.
fn render_by_host(ranges: &[RangeReport]) -> String {
    let mut hosts: Vec<&str> = Vec::new();
    for host in ranges.iter().flat_map(|r| r.host_allocation.hosts()) {
        if !hosts.contains(&host) {
            hosts.push(host);
        }
    }

    let mut table = Table::new(
        std::iter::once("Host".to_string())
            .chain((1..=ranges.len()).map(|idx| format!("Slot {}", idx))),
    );
    for host in hosts {
        table.push_row(
            std::iter::once(host.to_string())
                .chain(ranges.iter().map(|r| r.host_allocation.count_on(host).to_string())),
        );
    }
    table.render()
}

fn render_statuses(ranges: &[RangeReport]) -> String {
    let mut out = String::new();
    for (idx, range) in ranges.iter().enumerate() {
        let _ = writeln!(out, "\nSlot {}", idx + 1);
        let _ = writeln!(out, "{}", status_line(range));
    }
    out
}

fn status_line(range: &RangeReport) -> String {
    if range.is_fully_exposed() {
        "This slot is in risk of single node failure!".to_string()
    } else if range.is_fully_resilient() {
        "This slot is perfectly evenly distributed".to_string()
    } else {
        format!(
            "This slot is partially skewed, distributed between {} hosts with a max of {} on one host.",
            range.host_count, range.max_nodes_on_one_host
        )
    }
}
