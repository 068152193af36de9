use crate::attributes::{AttrExpr, AttrFilter};
use crate::catalog::{Catalog, Product};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::specification::AlwaysTrue;

/// How multiple conditions are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Combine {
    /// Every condition must hold.
    #[default]
    All,
    /// At least one condition must hold.
    Any,
}

/// Parse the conditions and build a single expression. `None` when there are no
/// conditions.
pub fn build_expr<I: AsRef<str>>(conditions: &[I], combine: Combine) -> Result<Option<AttrExpr>> {
    let filters = conditions
        .iter()
        .map(|c| AttrFilter::parse(c.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(match combine {
        Combine::All => AttrExpr::all(filters),
        Combine::Any => AttrExpr::any(filters),
    })
}

pub fn run<I: AsRef<str>>(catalog: &Catalog, conditions: &[I], combine: Combine) -> Result<CmdResult> {
    let expr = build_expr(conditions, combine)?;

    let matched: Vec<&Product> = match &expr {
        Some(expr) => catalog.select_by_attrs(expr)?,
        None => catalog.select(&AlwaysTrue),
    };

    let mut result = CmdResult::default();
    match &expr {
        Some(_) if matched.is_empty() => {
            result.add_message(CmdMessage::info("No products match."));
        }
        Some(expr) => {
            result.add_message(CmdMessage::info(format!(
                "{} of {} products match {}",
                matched.len(),
                catalog.len(),
                expr
            )));
        }
        None if matched.is_empty() => {
            result.add_message(CmdMessage::info("The catalog is empty."));
        }
        None => {}
    }

    Ok(result.with_listed_products(matched.into_iter().cloned().collect()))
}
