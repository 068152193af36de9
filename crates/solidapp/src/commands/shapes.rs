use crate::commands::{CmdMessage, CmdResult};
use crate::shapes::{use_it, Rectangle, Resizable, Square};

pub fn run() -> CmdResult {
    let mut shapes: Vec<Box<dyn Resizable>> =
        vec![Box::new(Rectangle::new(2, 3)), Box::new(Square::new(2))];

    let mut result = CmdResult::default();
    for shape in shapes.iter_mut() {
        let report = use_it(shape.as_mut());
        if !report.is_consistent() {
            result.add_message(CmdMessage::warning(format!(
                "A {} cannot stand in for a rectangle: expected an area of {}, got {}",
                report.shape, report.expected, report.actual
            )));
        }
        result.area_reports.push(report);
    }
    result
}
