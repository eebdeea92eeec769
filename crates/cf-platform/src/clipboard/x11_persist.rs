//! X11 clipboard persistence / X11 剪贴板内容持久化
//!
//! An X11 selection owner serves its own data. clipboard-rs serves it from a
//! background thread of this process, so the content is gone once the process
//! exits unless a clipboard manager stored a copy (ICCCM `SAVE_TARGETS`) or
//! the process keeps serving until another client takes the selection.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, ConnectionExt as _, CreateWindowAux, Window, WindowClass};
use x11rb::protocol::Event;
use x11rb::rust_connection::RustConnection;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(20);
const OWNER_POLL_INTERVAL: Duration = Duration::from_millis(200);
const DEFAULT_HANDOVER_TIMEOUT: Duration = Duration::from_secs(2);
const SAVE_PROPERTY: &[u8] = b"CLIPFORMAT_SAVE_TARGETS";

/// Where the submitted content lives after a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// A clipboard manager stored a copy.
    SavedByManager,
    /// This process served the selection until another client replaced it.
    ServedUntilReplaced,
    /// The content lives only as long as this process.
    ProcessBound,
    /// No X server could be reached.
    NoDisplay,
}

#[derive(Debug, Clone)]
pub struct PersistOptions {
    /// X display name, `None` for `$DISPLAY`.
    pub display: Option<String>,
    /// How long to wait for the clipboard manager to confirm the save.
    pub handover_timeout: Duration,
    /// Without a clipboard manager, block until another client owns the clipboard.
    pub hold_until_replaced: bool,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            display: None,
            handover_timeout: DEFAULT_HANDOVER_TIMEOUT,
            hold_until_replaced: false,
        }
    }
}

struct Atoms {
    clipboard: Atom,
    manager: Atom,
    save_targets: Atom,
    property: Atom,
}

impl Atoms {
    fn intern(conn: &RustConnection) -> Result<Self> {
        let intern = |name: &[u8]| -> Result<Atom> { Ok(conn.intern_atom(false, name)?.reply()?.atom) };
        Ok(Self {
            clipboard: intern(b"CLIPBOARD")?,
            manager: intern(b"CLIPBOARD_MANAGER")?,
            save_targets: intern(b"SAVE_TARGETS")?,
            property: intern(SAVE_PROPERTY)?,
        })
    }
}

/// Make the current CLIPBOARD content outlive this process where possible.
///
/// Blocking; run it off the async runtime.
pub fn persist(options: &PersistOptions) -> Result<Persistence> {
    let (conn, screen_num) = match x11rb::connect(options.display.as_deref()) {
        Ok(pair) => pair,
        Err(err) => {
            tracing::debug!(error = %err, "No X11 display, skipping clipboard handover");
            return Ok(Persistence::NoDisplay);
        }
    };
    let atoms = Atoms::intern(&conn)?;

    let owner = conn.get_selection_owner(atoms.clipboard)?.reply()?.owner;
    if owner == x11rb::NONE {
        tracing::warn!("CLIPBOARD has no owner after submission");
        return Ok(Persistence::ProcessBound);
    }

    if save_with_manager(&conn, screen_num, &atoms, options.handover_timeout)? {
        return Ok(Persistence::SavedByManager);
    }

    if options.hold_until_replaced {
        wait_until_replaced(&conn, atoms.clipboard, owner)?;
        return Ok(Persistence::ServedUntilReplaced);
    }

    Ok(Persistence::ProcessBound)
}

/// Ask the clipboard manager to convert `SAVE_TARGETS` and wait for its answer.
fn save_with_manager(
    conn: &RustConnection,
    screen_num: usize,
    atoms: &Atoms,
    timeout: Duration,
) -> Result<bool> {
    let manager = conn.get_selection_owner(atoms.manager)?.reply()?.owner;
    if manager == x11rb::NONE {
        tracing::debug!("No clipboard manager running");
        return Ok(false);
    }

    let root = conn.setup().roots[screen_num].root;
    let window = conn.generate_id()?;
    conn.create_window(
        x11rb::COPY_DEPTH_FROM_PARENT,
        window,
        root,
        0,
        0,
        1,
        1,
        0,
        WindowClass::INPUT_OUTPUT,
        x11rb::COPY_FROM_PARENT,
        &CreateWindowAux::new(),
    )?
    .check()?;
    conn.convert_selection(
        window,
        atoms.manager,
        atoms.save_targets,
        atoms.property,
        x11rb::CURRENT_TIME,
    )?
    .check()?;
    conn.flush()?;

    let saved = wait_for_save(conn, window, atoms.manager, timeout);

    conn.destroy_window(window)?;
    conn.flush()?;
    saved
}

fn wait_for_save(
    conn: &RustConnection,
    window: Window,
    manager: Atom,
    timeout: Duration,
) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        match conn.poll_for_event()? {
            Some(Event::SelectionNotify(event))
                if event.requestor == window && event.selection == manager =>
            {
                let saved = event.property != x11rb::NONE;
                tracing::debug!(saved, "Clipboard manager answered SAVE_TARGETS");
                return Ok(saved);
            }
            Some(_) => {}
            None => thread::sleep(EVENT_POLL_INTERVAL),
        }
    }
    tracing::warn!(?timeout, "Clipboard manager did not confirm the save in time");
    Ok(false)
}

fn wait_until_replaced(conn: &RustConnection, clipboard: Atom, owner: Window) -> Result<()> {
    tracing::info!("Serving clipboard content until another application replaces it");
    loop {
        if conn.get_selection_owner(clipboard)?.reply()?.owner != owner {
            tracing::debug!("Clipboard ownership moved to another client");
            return Ok(());
        }
        thread::sleep(OWNER_POLL_INTERVAL);
    }
}
