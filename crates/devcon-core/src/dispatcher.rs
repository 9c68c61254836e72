//! Command dispatch
//!
//! Matches parsed invocations against the catalog and fans them out to
//! subscribers, synchronously and in subscription order.
//!
//! Subscribers run on the caller's thread. A panicking subscriber is not
//! caught here: isolating handler faults is the host's responsibility.

use std::sync::mpsc::{self, Receiver};

use devcon_core_types::schema::{EVENT_END, EVENT_UNMATCHED};

use crate::catalog::CommandCatalog;
use crate::model::Command;
use crate::parser::{self, ParseOutcome};

/// Callback invoked with the matched command and its argument tokens
pub type SubmitHandler = Box<dyn FnMut(&Command, &[String]) + Send>;

/// Handle returned by [`Dispatcher::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Message delivered to channel subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedCommand {
    pub command: Command,
    pub args: Vec<String>,
}

/// What happened to a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No sentinel; the line was ignored
    NotACommand,
    /// Parsed, but no catalog entry has this name
    Unmatched { name: String, args: Vec<String> },
    /// Matched and delivered to `notified` subscribers
    Dispatched {
        command: Command,
        args: Vec<String>,
        notified: usize,
    },
}

impl SubmitOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, SubmitOutcome::Dispatched { .. })
    }
}

/// Ordered list of command-submitted observers
#[derive(Default)]
pub struct Dispatcher {
    subscribers: Vec<(SubscriptionId, SubmitHandler)>,
    next_id: u64,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for command-submitted events
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Command, &[String]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Register a subscriber that forwards every dispatch over a channel
    ///
    /// Dropping the receiver silently turns the subscription into a no-op;
    /// call [`Dispatcher::unsubscribe`] to remove it.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<DispatchedCommand>) {
        let (tx, rx) = mpsc::channel();
        let id = self.subscribe(move |command: &Command, args: &[String]| {
            tx.send(DispatchedCommand {
                command: command.clone(),
                args: args.to_vec(),
            })
            .ok();
        });
        (id, rx)
    }

    /// Remove a subscriber; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Parse `input`, look it up in `catalog` and notify subscribers on a match
    pub fn submit(&mut self, input: &str, catalog: &CommandCatalog) -> SubmitOutcome {
        let invocation = match parser::parse(input) {
            ParseOutcome::NotACommand => return SubmitOutcome::NotACommand,
            ParseOutcome::Invocation(inv) => inv,
        };

        let Some(command) = catalog.find_by_name(&invocation.command_name) else {
            tracing::debug!(
                component = module_path!(),
                op = "submit",
                event = EVENT_UNMATCHED,
                command = invocation.command_name.as_str(),
            );
            return SubmitOutcome::Unmatched {
                name: invocation.command_name,
                args: invocation.args,
            };
        };

        let notified = self.dispatch(command, &invocation.args);
        tracing::debug!(
            component = module_path!(),
            op = "submit",
            event = EVENT_END,
            command = command.name.as_str(),
            arg_count = invocation.args.len(),
            notified,
        );

        SubmitOutcome::Dispatched {
            command: command.clone(),
            args: invocation.args,
            notified,
        }
    }

    /// Invoke every subscriber with `command`; returns how many ran
    pub fn dispatch(&mut self, command: &Command, args: &[String]) -> usize {
        for (_, handler) in self.subscribers.iter_mut() {
            handler(command, args);
        }
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn catalog() -> CommandCatalog {
        CommandCatalog::new(vec![
            Command::new("spawn", "spawn enemy", "goblin"),
            Command::new("speed", "set speed", "1.0"),
        ])
        .unwrap()
    }

    #[test]
    fn test_subscribers_run_in_subscription_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            dispatcher.subscribe(move |_, _| order.lock().unwrap().push(tag));
        }

        let outcome = dispatcher.submit("@spawn", &catalog());
        assert!(outcome.is_dispatched());
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let hits = Arc::new(Mutex::new(0));
        let mut dispatcher = Dispatcher::new();
        let counter = hits.clone();
        let id = dispatcher.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        dispatcher.submit("@spawn", &catalog());
        assert!(dispatcher.unsubscribe(id));
        assert!(!dispatcher.unsubscribe(id));
        dispatcher.submit("@spawn", &catalog());

        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn test_dispatch_without_subscribers_still_matches() {
        let mut dispatcher = Dispatcher::new();
        match dispatcher.submit("@speed 2", &catalog()) {
            SubmitOutcome::Dispatched { notified, args, .. } => {
                assert_eq!(notified, 0);
                assert_eq!(args, vec!["2"]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_channel_subscriber_receives_messages() {
        let mut dispatcher = Dispatcher::new();
        let (_id, rx) = dispatcher.subscribe_channel();

        dispatcher.submit("@spawn orc 2", &catalog());
        dispatcher.submit("not a command", &catalog());

        let msg = rx.try_recv().unwrap();
        assert_eq!(msg.command.name, "spawn");
        assert_eq!(msg.args, vec!["orc", "2"]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_does_not_break_dispatch() {
        let mut dispatcher = Dispatcher::new();
        let (_id, rx) = dispatcher.subscribe_channel();
        drop(rx);
        assert!(dispatcher.submit("@spawn", &catalog()).is_dispatched());
    }

    #[test]
    fn test_unknown_and_empty_names_are_unmatched() {
        let mut dispatcher = Dispatcher::new();
        assert_eq!(
            dispatcher.submit("@", &catalog()),
            SubmitOutcome::Unmatched {
                name: String::new(),
                args: vec![],
            }
        );
        assert!(matches!(
            dispatcher.submit("@unknown x", &catalog()),
            SubmitOutcome::Unmatched { ref name, .. } if name == "unknown"
        ));
    }
}
