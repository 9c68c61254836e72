//! The console context object
//!
//! `CommandManager` owns the catalog, the subscriber list and the log sink.
//! Hosts create one, keep it wherever their update loop lives, and pass it
//! by reference; there is no process-wide console state.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use devcon_core_types::Severity;

use crate::catalog::{CatalogSource, CommandCatalog};
use crate::config::ConsoleConfig;
use crate::dispatcher::{DispatchedCommand, Dispatcher, SubmitOutcome, SubscriptionId};
use crate::errors::Result;
use crate::log_sink::LogSink;
use crate::logging_facility::SinkLayer;
use crate::model::Command;
use crate::{log_op_end, log_op_error, log_op_start};

#[derive(Debug)]
pub struct CommandManager {
    catalog: Arc<CommandCatalog>,
    dispatcher: Dispatcher,
    log_sink: Arc<LogSink>,
    diagnostics: bool,
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}

impl CommandManager {
    /// Create a console with an empty catalog
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            catalog: Arc::new(CommandCatalog::empty()),
            dispatcher: Dispatcher::new(),
            log_sink: Arc::new(LogSink::bounded(config.log_capacity)),
            diagnostics: config.diagnostics,
        }
    }

    /// Builder form of [`CommandManager::replace_catalog`]
    pub fn with_catalog(mut self, catalog: CommandCatalog) -> Self {
        self.replace_catalog(catalog);
        self
    }

    /// Current catalog; the handle stays valid across reloads
    pub fn catalog(&self) -> Arc<CommandCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Swap in a new catalog as a whole
    pub fn replace_catalog(&mut self, catalog: CommandCatalog) {
        let duplicates = catalog.duplicate_names();
        if !duplicates.is_empty() {
            tracing::warn!(
                component = module_path!(),
                op = "catalog_replace",
                duplicates = ?duplicates,
                "duplicate command names; only the first of each is reachable"
            );
        }
        self.catalog = Arc::new(catalog);
    }

    /// Load the catalog from `source`
    ///
    /// On failure the catalog is left empty, so every submission is
    /// unmatched, while logging keeps working. The failure is reported once
    /// and not retried.
    ///
    /// # Errors
    ///
    /// Returns the source's `CatalogLoad` error.
    pub fn load_catalog(&mut self, source: &dyn CatalogSource) -> Result<usize> {
        let location = source.describe();
        let started = log_op_start!("catalog_install", path = location.as_str());

        match source.load() {
            Ok(catalog) => {
                let len = catalog.len();
                self.replace_catalog(catalog);
                log_op_end!("catalog_install", started, catalog_len = len);
                Ok(len)
            }
            Err(err) => {
                self.catalog = Arc::new(CommandCatalog::empty());
                log_op_error!("catalog_install", started, err.clone());
                Err(err)
            }
        }
    }

    pub fn log_sink(&self) -> &Arc<LogSink> {
        &self.log_sink
    }

    /// A `tracing` layer feeding this console's log sink
    pub fn sink_layer(&self) -> SinkLayer {
        SinkLayer::new(Arc::clone(&self.log_sink))
    }

    /// See [`Dispatcher::subscribe`]
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Command, &[String]) + Send + 'static,
    {
        self.dispatcher.subscribe(handler)
    }

    /// See [`Dispatcher::subscribe_channel`]
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<DispatchedCommand>) {
        self.dispatcher.subscribe_channel()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    /// Handle one committed input line
    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        let outcome = self.dispatcher.submit(input, &self.catalog);
        if let SubmitOutcome::Unmatched { name, .. } = &outcome {
            if self.diagnostics {
                self.log_sink
                    .ingest(Severity::Warning, &format!("Unknown command '{}'", name));
            }
        }
        outcome
    }

    /// Pre-filled input line for the command at `index` in the catalog
    pub fn invocation_template(&self, index: usize) -> Option<String> {
        self.catalog.get(index).map(Command::invocation_template)
    }
}
