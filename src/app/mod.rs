pub mod printer;

use std::io::Write;

use crate::{
    error::GenerationError,
    generators::{GenerationConfig, GenerationEvent, GenerationResult, generate},
};
use printer::Printer;

pub type Outcome = Result<GenerationResult, GenerationError>;

/// Events the generator may run ahead of the printer.
const EVENT_BACKLOG: usize = 16;

/// Runs one generation and prints it.
#[derive(Debug, Default, Clone)]
pub struct App {
    /// Narrate every committed pass and dump the final graph
    verbose: bool,
}

impl App {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Generates a maze and prints it to stdout.
    pub fn run(&self, config: GenerationConfig) -> std::io::Result<Outcome> {
        let (outcome, _) = self.run_with_writer(config, std::io::stdout())?;
        Ok(outcome)
    }

    /// Generates a maze and prints it to `out`, handing the writer back.
    ///
    /// In verbose mode the trace is printed from a separate thread that
    /// consumes generation events as they are produced.
    pub fn run_with_writer<W: Write + Send + 'static>(
        &self,
        config: GenerationConfig,
        out: W,
    ) -> std::io::Result<(Outcome, W)> {
        tracing::info!("[app] Starting generation with {:?}", config);
        let mut printer = Printer::new(out);

        let outcome = if self.verbose {
            let (event_tx, event_rx) =
                std::sync::mpsc::sync_channel::<GenerationEvent>(EVENT_BACKLOG);
            // Spawn a thread to print events while the maze is generated
            let printer_thread_handle = std::thread::spawn(move || {
                let status = printer.print_events(event_rx);
                (printer, status)
            });

            // The sender is dropped when generation returns, which ends the printer loop
            let outcome = generate(config, Some(event_tx));

            let (returned, status) = printer_thread_handle
                .join()
                .map_err(|_| std::io::Error::other("Printer thread panicked"))?;
            status?;
            printer = returned;
            outcome
        } else {
            generate(config, None)
        };

        match &outcome {
            Ok(result) => {
                if self.verbose {
                    printer.print_graph(&result.graph)?;
                }
                printer.print_summary(result)?;
            }
            Err(err) => {
                tracing::error!("[app] Generation failed: {}", err);
                printer.print_failure(err, config.size)?;
            }
        }
        printer.flush()?;

        Ok((outcome, printer.into_inner()))
    }
}
