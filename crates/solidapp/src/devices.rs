//! # Interface Segregation: Printers and Scanners
//!
//! [`Machine`] bundles print, fax and scan into one trait. Every implementor
//! has to provide all three, so [`OldFashionedPrinter`] ends up with two
//! operations it can only refuse at runtime.
//!
//! The segregated traits [`Printer`], [`Scanner`] and [`Fax`] each carry one
//! capability. Devices implement only what they support, and
//! [`MultiFunctionDevice`] is available to any type that is both a
//! [`Printer`] and a [`Scanner`] without extra code.

use crate::error::{Result, SolidError};
use serde::Serialize;
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Print,
    Fax,
    Scan,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Print => "print",
            Operation::Fax => "fax",
            Operation::Scan => "scan",
        }
    }

    fn progressive(&self) -> &'static str {
        match self {
            Operation::Print => "Printing",
            Operation::Fax => "Faxing",
            Operation::Scan => "Scanning",
        }
    }
}

/// What a device did with a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceAction {
    pub device: &'static str,
    pub operation: Operation,
    pub document: String,
}

impl DeviceAction {
    fn new(device: &'static str, operation: Operation, document: &Document) -> Self {
        Self {
            device,
            operation,
            document: document.name.clone(),
        }
    }
}

impl fmt::Display for DeviceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}...",
            self.device,
            self.operation.progressive(),
            self.document
        )
    }
}

// --- The broad interface ---

/// One trait for every office operation.
pub trait Machine {
    fn name(&self) -> &'static str;
    fn print(&self, doc: &Document) -> Result<DeviceAction>;
    fn fax(&self, doc: &Document) -> Result<DeviceAction>;
    fn scan(&self, doc: &Document) -> Result<DeviceAction>;
}

pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn name(&self) -> &'static str {
        "multi-function printer"
    }

    fn print(&self, doc: &Document) -> Result<DeviceAction> {
        Ok(DeviceAction::new(self.name(), Operation::Print, doc))
    }

    fn fax(&self, doc: &Document) -> Result<DeviceAction> {
        Ok(DeviceAction::new(self.name(), Operation::Fax, doc))
    }

    fn scan(&self, doc: &Document) -> Result<DeviceAction> {
        Ok(DeviceAction::new(self.name(), Operation::Scan, doc))
    }
}

/// Can only print, but the broad trait forces it to answer fax and scan too.
pub struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn name(&self) -> &'static str {
        "old-fashioned printer"
    }

    fn print(&self, doc: &Document) -> Result<DeviceAction> {
        Ok(DeviceAction::new(self.name(), Operation::Print, doc))
    }

    fn fax(&self, _doc: &Document) -> Result<DeviceAction> {
        warn!(device = self.name(), "fax requested on a device without fax");
        Err(SolidError::Unsupported("fax"))
    }

    fn scan(&self, _doc: &Document) -> Result<DeviceAction> {
        warn!(device = self.name(), "scan requested on a device without scanner");
        Err(SolidError::Unsupported("scan"))
    }
}

/// Run an operation through the broad interface.
pub fn operate(machine: &dyn Machine, operation: Operation, doc: &Document) -> Result<DeviceAction> {
    match operation {
        Operation::Print => machine.print(doc),
        Operation::Fax => machine.fax(doc),
        Operation::Scan => machine.scan(doc),
    }
}

// --- Segregated interfaces ---

pub trait Printer {
    fn print(&self, doc: &Document) -> DeviceAction;
}

pub trait Scanner {
    fn scan(&self, doc: &Document) -> DeviceAction;
}

pub trait Fax {
    fn fax(&self, doc: &Document) -> DeviceAction;
}

/// Anything that can both print and scan.
pub trait MultiFunctionDevice: Printer + Scanner {
    /// Scan the document, then print the scan.
    fn copy(&self, doc: &Document) -> [DeviceAction; 2] {
        [self.scan(doc), self.print(doc)]
    }
}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

pub struct InkjetPrinter;

impl Printer for InkjetPrinter {
    fn print(&self, doc: &Document) -> DeviceAction {
        DeviceAction::new("inkjet printer", Operation::Print, doc)
    }
}

pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, doc: &Document) -> DeviceAction {
        DeviceAction::new("photocopier", Operation::Print, doc)
    }
}

impl Scanner for Photocopier {
    fn scan(&self, doc: &Document) -> DeviceAction {
        DeviceAction::new("photocopier", Operation::Scan, doc)
    }
}

pub struct FaxMachine;

impl Fax for FaxMachine {
    fn fax(&self, doc: &Document) -> DeviceAction {
        DeviceAction::new("fax machine", Operation::Fax, doc)
    }
}
