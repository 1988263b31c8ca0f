use super::*;
use std::sync::Mutex;

struct RecordingScreen {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl ScreenOps for RecordingScreen {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

fn recording_pair() -> (Arc<Mutex<Vec<&'static str>>>, Box<RecordingScreen>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let screen = Box::new(RecordingScreen {
        calls: calls.clone(),
    });
    (calls, screen)
}

#[test]
fn guard_enters_on_creation_and_leaves_on_drop() {
    let (calls, screen) = recording_pair();
    {
        let _guard = TerminalGuard::with_screen(screen).unwrap();
        assert_eq!(*calls.lock().unwrap(), ["enter"]);
    }

    assert_eq!(*calls.lock().unwrap(), ["enter", "leave"]);
}

#[test]
fn restore_handle_leaves_only_once() {
    let (calls, screen) = recording_pair();
    let guard = TerminalGuard::with_screen(screen).unwrap();
    let handle = guard.handle();

    handle.restore().unwrap();
    handle.restore().unwrap();
    drop(guard);

    assert_eq!(*calls.lock().unwrap(), ["enter", "leave"]);
}

#[test]
fn cloned_handles_share_the_once_flag() {
    let (calls, screen) = recording_pair();
    let guard = TerminalGuard::with_screen(screen).unwrap();
    let first = guard.handle();
    let second = first.clone();

    first.restore().unwrap();
    second.restore().unwrap();
    drop(guard);

    assert_eq!(*calls.lock().unwrap(), ["enter", "leave"]);
}

#[test]
fn termination_signals_use_conventional_exit_codes() {
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
}
