use std::sync::{Arc, Mutex};

use devcon_core::{Command, CommandCatalog, CommandManager};

/// Calls recorded by [`recording_subscriber`]: (command name, args)
pub type Calls = Arc<Mutex<Vec<(String, Vec<String>)>>>;

/// Catalog with the single `spawn` command used across scenarios
#[allow(dead_code)]
pub fn spawn_catalog() -> CommandCatalog {
    CommandCatalog::new(vec![Command::new("spawn", "spawn enemy", "goblin")])
        .expect("spawn catalog is valid")
}

/// Attach a subscriber that records every call it receives
#[allow(dead_code)]
pub fn recording_subscriber(manager: &mut CommandManager) -> Calls {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    manager.subscribe(move |cmd, args| {
        sink.lock()
            .expect("calls lock")
            .push((cmd.name.clone(), args.to_vec()));
    });
    calls
}
