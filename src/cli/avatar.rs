//! kanboard avatar command implementation

use serde::Serialize;

use crate::cli::Context;
use crate::error::Result;
use crate::identity::{color_of, initials_of, Color};
use crate::output::{emit_success, HumanOutput};

#[derive(Serialize)]
struct AvatarEntry<'a> {
    name: &'a str,
    initials: String,
    color: Color,
}

pub fn run(ctx: &Context, names: &[String]) -> Result<()> {
    let entries = names
        .iter()
        .map(|name| {
            Ok(AvatarEntry {
                name,
                initials: initials_of(name)?,
                color: color_of(name),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut human = HumanOutput::new("kanboard avatar");
    for entry in &entries {
        human.push_summary(entry.name, format!("{} {}", entry.initials, entry.color));
    }

    emit_success(ctx.output, "avatar", &entries, Some(&human))
}
