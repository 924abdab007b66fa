//! kanboard catalog command implementation

use serde::Serialize;

use crate::catalog::{PriorityCatalog, PriorityLevel, StatusCatalog, StatusEntry};
use crate::cli::Context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};

#[derive(Serialize)]
struct CatalogReport {
    priorities: &'static [PriorityLevel],
    statuses: &'static [StatusEntry],
}

pub fn run(ctx: &Context) -> Result<()> {
    let report = CatalogReport {
        priorities: PriorityCatalog::levels(),
        statuses: StatusCatalog::entries(),
    };

    let mut human = HumanOutput::new("kanboard catalog");
    for level in report.priorities {
        human.push_summary(
            format!("priority {}", level.value),
            format!("{} [{}]", level.label, level.icon),
        );
    }
    for status in report.statuses {
        human.push_summary(format!("status {}", status.label), format!("[{}]", status.icon));
    }

    emit_success(ctx.output, "catalog", &report, Some(&human))
}
