use crate::commands::{CmdMessage, CmdResult};
use crate::devices::{
    operate, Document, Fax, FaxMachine, InkjetPrinter, Machine, MultiFunctionDevice,
    MultiFunctionPrinter, OldFashionedPrinter, Operation, Photocopier, Printer,
};

const OPERATIONS: [Operation; 3] = [Operation::Print, Operation::Fax, Operation::Scan];

/// Run every operation on the broad-interface machines, then use the
/// segregated devices for what they actually support.
pub fn run(doc: &Document) -> CmdResult {
    let mut result = CmdResult::default();

    let machines: [&dyn Machine; 2] = [&MultiFunctionPrinter, &OldFashionedPrinter];
    for machine in machines {
        for op in OPERATIONS {
            match operate(machine, op, doc) {
                Ok(action) => result.device_actions.push(action),
                Err(e) => result.add_message(CmdMessage::warning(format!(
                    "{}: {}",
                    machine.name(),
                    e
                ))),
            }
        }
    }

    result.device_actions.push(InkjetPrinter.print(doc));
    result.device_actions.extend(Photocopier.copy(doc));
    result.device_actions.push(FaxMachine.fax(doc));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operations_become_warnings() {
        let res = run(&Document::new("memo.txt"));
        let warnings: Vec<&str> = res.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            warnings,
            vec![
                "old-fashioned printer: Operation not supported: fax",
                "old-fashioned printer: Operation not supported: scan",
            ]
        );
    }

    #[test]
    fn successful_actions_are_listed_in_order() {
        let res = run(&Document::new("memo.txt"));
        let devices: Vec<(&str, Operation)> = res
            .device_actions
            .iter()
            .map(|a| (a.device, a.operation))
            .collect();
        assert_eq!(
            devices,
            vec![
                ("multi-function printer", Operation::Print),
                ("multi-function printer", Operation::Fax),
                ("multi-function printer", Operation::Scan),
                ("old-fashioned printer", Operation::Print),
                ("inkjet printer", Operation::Print),
                ("photocopier", Operation::Scan),
                ("photocopier", Operation::Print),
                ("fax machine", Operation::Fax),
            ]
        );
        assert!(res.device_actions.iter().all(|a| a.document == "memo.txt"));
    }
}
