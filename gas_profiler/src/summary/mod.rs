//!
//! The gas profiler summary.
//!

pub mod element;
pub mod report;


use std::sync::Arc;
use std::sync::Mutex;

use colored::Colorize;

use crate::profile::case::Case;
use crate::profile::description::CaseDescription;

use self::element::outcome::passed_variant::PassedVariant;
use self::element::outcome::Outcome;
use self::element::Element;
use self::report::Report;

///
/// The gas profiler summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// The output verbosity.
    verbosity: bool,
    /// Whether the summary box is suppressed.
    quiet: bool,
    /// The passed cases counter.
    passed: usize,
    /// The failed cases counter.
    failed: usize,
    /// The invalid cases counter.
    invalid: usize,
    /// The ignored cases counter.
    ignored: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbosity: bool, quiet: bool) -> Self {
        Self {
            elements: Vec::new(),
            verbosity,
            quiet,
            passed: 0,
            failed: 0,
            invalid: 0,
            ignored: 0,
        }
    }

    ///
    /// Whether every case has passed.
    ///
    /// An empty summary is not successful, as nothing has been profiled.
    ///
    pub fn is_successful(&self) -> bool {
        if self.elements.is_empty() {
            return false;
        }

        self.elements
            .iter()
            .all(|element| matches!(element.outcome, Outcome::Passed { .. }))
    }

    ///
    /// Returns the elements in the order they were reported.
    ///
    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    ///
    /// Returns the gas estimate reported for the contract, if any.
    ///
    pub fn estimate(&self, contract: &str) -> Option<u64> {
        self.elements
            .iter()
            .filter(|element| element.description.contract == contract)
            .find_map(|element| match element.outcome {
                Outcome::Passed {
                    variant: PassedVariant::Estimate { gas },
                } => Some(gas),
                _ => None,
            })
    }

    ///
    /// Builds the JSON report from the passed cases.
    ///
    pub fn report(&self) -> Report {
        let mut report = Report::default();
        for element in self.elements.iter() {
            let variant = match element.outcome {
                Outcome::Passed { ref variant } => variant,
                _ => continue,
            };

            let contract = report
                .contracts
                .entry(element.description.contract.clone())
                .or_default();
            match (variant, element.description.method.as_ref()) {
                (
                    PassedVariant::Deploy {
                        address,
                        size,
                        gas_used,
                    },
                    _,
                ) => {
                    contract.address = Some(*address);
                    contract.size = Some(*size);
                    contract.deploy_gas = Some(*gas_used);
                }
                (PassedVariant::Transaction { gas_used }, Some(method)) => {
                    contract
                        .methods
                        .entry(method.to_owned())
                        .or_default()
                        .transaction_gas = Some(*gas_used);
                }
                (PassedVariant::Estimate { gas }, Some(method)) => {
                    contract.methods.entry(method.to_owned()).or_default().estimate = Some(*gas);
                }
                (_, None) => {}
            }
        }
        report
    }

    ///
    /// Wraps data into a synchronized shared reference.
    ///
    pub fn wrap(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    ///
    /// Extracts the data from the synchronized shared reference.
    ///
    pub fn unwrap_arc(summary: Arc<Mutex<Self>>) -> Self {
        Arc::try_unwrap(summary)
            .expect("Last shared reference")
            .into_inner()
            .expect("Last shared reference")
    }

    ///
    /// Adds an invalid outcome.
    ///
    pub fn invalid<S>(summary: Arc<Mutex<Self>>, description: CaseDescription, error: S)
    where
        S: ToString,
    {
        let element = Element::new(description, Outcome::invalid(error));
        summary.lock().expect("Sync").push_element(element);
    }

    ///
    /// Adds a failed outcome.
    ///
    pub fn failed<S>(summary: Arc<Mutex<Self>>, description: CaseDescription, error: S)
    where
        S: ToString,
    {
        let element = Element::new(description, Outcome::failed(error));
        summary.lock().expect("Sync").push_element(element);
    }

    ///
    /// Adds an ignored outcome.
    ///
    pub fn ignored(summary: Arc<Mutex<Self>>, description: CaseDescription) {
        let element = Element::new(description, Outcome::ignored());
        summary.lock().expect("Sync").push_element(element);
    }

    ///
    /// Adds a passed contract deploy outcome.
    ///
    pub fn passed_deploy(
        summary: Arc<Mutex<Self>>,
        description: CaseDescription,
        address: web3::types::Address,
        size: usize,
        gas_used: u64,
    ) {
        let passed_variant = PassedVariant::Deploy {
            address,
            size,
            gas_used,
        };
        Self::passed(summary, description, passed_variant);
    }

    ///
    /// Adds a passed transaction outcome.
    ///
    pub fn passed_transaction(
        summary: Arc<Mutex<Self>>,
        description: CaseDescription,
        gas_used: u64,
    ) {
        let passed_variant = PassedVariant::Transaction { gas_used };
        Self::passed(summary, description, passed_variant);
    }

    ///
    /// Adds a passed gas estimation outcome.
    ///
    pub fn passed_estimate(summary: Arc<Mutex<Self>>, description: CaseDescription, gas: u64) {
        let passed_variant = PassedVariant::Estimate { gas };
        Self::passed(summary, description, passed_variant);
    }

    ///
    /// Adds a passed outcome.
    ///
    fn passed(
        summary: Arc<Mutex<Self>>,
        description: CaseDescription,
        passed_variant: PassedVariant,
    ) {
        let element = Element::new(description, Outcome::passed(passed_variant));
        summary.lock().expect("Sync").push_element(element);
    }

    ///
    /// Pushes an element to the summary, printing it.
    ///
    fn push_element(&mut self, element: Element) {
        if let Some(string) = element.print(self.verbosity) {
            println!("{string}");
        }

        match element.outcome {
            Outcome::Passed { .. } => self.passed += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Invalid { .. } => self.invalid += 1,
            Outcome::Ignored => self.ignored += 1,
        }

        self.elements.push(element);
    }

    ///
    /// Counts the elements of a case.
    ///
    fn count(&self, case: Case) -> usize {
        self.elements
            .iter()
            .filter(|element| element.description.case == case)
            .count()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔══════════════════════╡ GAS PROFILING ╞═══════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "PASSED".green(),
            self.passed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "INVALID".red(),
            self.invalid.to_string().red(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "IGNORED".bright_black(),
            self.ignored.to_string().bright_black(),
        )?;
        writeln!(
            f,
            "║        {:5} DEPLOYS {:5} TRANSACTIONS {:5} ESTIMATES      ║",
            self.count(Case::Deploy),
            self.count(Case::Transaction),
            self.count(Case::Estimate),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
