/*
 *   Copyright (c) 2024 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Raw-mode lifecycle, window-size probing, and the signal plumbing that keeps both
//! coherent across SIGWINCH/SIGCONT/SIGINT/SIGQUIT.
//!
//! Everything here talks to `libc` directly rather than through a crate like `nix` or
//! `termios`: this module *is* the raw-terminal boundary, so there is nothing to gain
//! from a wrapper between it and the syscalls.

use std::io;
use std::os::unix::io::RawFd;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::decoder::ByteSource;
use crate::error::{ReadlineError, Result};

static GOT_WINCH: AtomicBool = AtomicBool::new(false);
static GOT_CONT: AtomicBool = AtomicBool::new(false);
static CAUGHT_SIGNAL: AtomicI32 = AtomicI32::new(0);

extern "C" fn on_winch(_sig: libc::c_int) {
    GOT_WINCH.store(true, Ordering::SeqCst);
}

extern "C" fn on_cont(_sig: libc::c_int) {
    GOT_CONT.store(true, Ordering::SeqCst);
}

extern "C" fn on_terminating_signal(sig: libc::c_int) {
    CAUGHT_SIGNAL.store(sig, Ordering::SeqCst);
}

/// Clears and returns whether SIGWINCH fired since the last call.
pub fn take_winch() -> bool {
    GOT_WINCH.swap(false, Ordering::SeqCst)
}

/// Clears and returns whether SIGCONT fired since the last call.
pub fn take_cont() -> bool {
    GOT_CONT.swap(false, Ordering::SeqCst)
}

/// Sets the SIGWINCH flag as if the signal had fired, without a real signal handler
/// installed. Lets other in-crate test modules (e.g. `editor`'s) exercise the
/// mid-edit resize path against a [`crate::pipe_terminal::PipeTerminal`], which has
/// no OS signal of its own to raise.
#[cfg(test)]
pub(crate) fn force_winch() {
    GOT_WINCH.store(true, Ordering::SeqCst);
}

/// Clears and returns the signal number caught by the SIGINT/SIGQUIT handlers
/// installed for the duration of [`RawTerminal::guard_terminating_signals`], if any.
fn take_caught_signal() -> Option<i32> {
    match CAUGHT_SIGNAL.swap(0, Ordering::SeqCst) {
        0 => None,
        sig => Some(sig),
    }
}

/// Rows and columns of the controlling terminal. Never zero: [`get_terminal_size`]
/// falls back to 24x80 when every other source comes up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u32,
    pub cols: u32,
}

impl WindowSize {
    pub const FALLBACK: WindowSize = WindowSize { rows: 24, cols: 80 };
}

/// Tries, in order: `TIOCGWINSZ`, the `ROWS`/`COLUMNS` environment variables, and
/// finally an in-band cursor-position probe — useful when `outfd` is a pipe wired up
/// to a real terminal further downstream. Falls back to 24x80 if nothing answers.
pub fn get_terminal_size(infd: RawFd, outfd: RawFd) -> WindowSize {
    let mut ws = unsafe { std::mem::zeroed::<libc::winsize>() };
    unsafe { libc::ioctl(outfd, libc::TIOCGWINSZ, &mut ws) };
    let mut rows = ws.ws_row as u32;
    let mut cols = ws.ws_col as u32;

    if rows == 0 {
        if let Some(n) = std::env::var("ROWS").ok().and_then(|s| s.parse().ok()) {
            rows = n;
        }
    }
    if cols == 0 {
        if let Some(n) = std::env::var("COLUMNS").ok().and_then(|s| s.parse().ok()) {
            cols = n;
        }
    }

    if (rows == 0 || cols == 0) && write_all_raw(outfd, b"\x1b7\x1b[9979;9979H\x1b[6n\x1b8").is_ok() {
        if let Some((r, c)) = probe_cursor_position(infd) {
            rows = r;
            cols = c;
        }
    }

    WindowSize { rows: if rows == 0 { WindowSize::FALLBACK.rows } else { rows }, cols: if cols == 0 { WindowSize::FALLBACK.cols } else { cols } }
}

/// Parses a `CSI row ; col R` cursor-position report off `infd`.
fn probe_cursor_position(infd: RawFd) -> Option<(u32, u32)> {
    let mut buf = [0u8; 32];
    let mut n = 0usize;
    while n < buf.len() {
        match read_byte_raw(infd) {
            Ok(Some(b)) => {
                buf[n] = b;
                n += 1;
                if b == b'R' {
                    break;
                }
            }
            _ => break,
        }
    }
    if n < 2 || buf[0] != 0x1b || buf[1] != b'[' {
        return None;
    }
    let body = std::str::from_utf8(&buf[2..n.saturating_sub(1)]).ok()?;
    let mut parts = body.splitn(2, ';');
    let row: u32 = parts.next()?.parse().ok()?;
    let col: u32 = parts.next()?.parse().ok()?;
    Some((row, col))
}

fn read_byte_raw(fd: RawFd) -> io::Result<Option<u8>> {
    let mut byte: u8 = 0;
    loop {
        let rc = unsafe { libc::read(fd, &mut byte as *mut u8 as *mut libc::c_void, 1) };
        match rc {
            1 => return Ok(Some(byte)),
            0 => return Ok(None),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(err);
            }
        }
    }
}

/// Writes `bytes` to `fd` in full, retrying on `EINTR`. For one-off writes to a fd
/// with no [`RawTerminal`] around it, such as [`crate::Editor::clear_screen`].
pub fn write_all(fd: RawFd, bytes: &[u8]) -> Result<()> {
    write_all_raw(fd, bytes).map_err(ReadlineError::Io)
}

fn write_all_raw(fd: RawFd, mut bytes: &[u8]) -> io::Result<()> {
    while !bytes.is_empty() {
        let rc = unsafe { libc::write(fd, bytes.as_ptr() as *const libc::c_void, bytes.len()) };
        match rc {
            n if n > 0 => bytes = &bytes[n as usize..],
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(err);
            }
        }
    }
    Ok(())
}

fn install_handler(signum: libc::c_int, handler: extern "C" fn(libc::c_int), flags: libc::c_int) -> libc::sigaction {
    let mut sa: libc::sigaction = unsafe { std::mem::zeroed() };
    sa.sa_sigaction = handler as usize;
    sa.sa_flags = flags;
    unsafe { libc::sigemptyset(&mut sa.sa_mask) };
    let mut old: libc::sigaction = unsafe { std::mem::zeroed() };
    unsafe { libc::sigaction(signum, &sa, &mut old) };
    old
}

fn restore_handler(signum: libc::c_int, old: &libc::sigaction) {
    unsafe { libc::sigaction(signum, old, std::ptr::null_mut()) };
}

/// Owns the controlling terminal's raw-mode lifecycle for one editor. Dropping it
/// restores cooked mode, mirroring the C library's `atexit`-registered teardown —
/// there is no process-wide "one raw terminal" here, so the guarantee is tied to this
/// value's lifetime instead of the process's.
pub struct RawTerminal {
    infd: RawFd,
    outfd: RawFd,
    saved_termios: Option<libc::termios>,
    saved_winch: Option<libc::sigaction>,
    saved_cont: Option<libc::sigaction>,
}

impl RawTerminal {
    pub fn new(infd: RawFd, outfd: RawFd) -> Self {
        Self { infd, outfd, saved_termios: None, saved_winch: None, saved_cont: None }
    }

    pub fn infd(&self) -> RawFd {
        self.infd
    }

    pub fn outfd(&self) -> RawFd {
        self.outfd
    }

    pub fn is_raw(&self) -> bool {
        self.saved_termios.is_some()
    }

    /// Snapshots the current terminal attributes, disables echo/canonical
    /// input/signal-generating keys/output post-processing, and installs the
    /// SIGWINCH/SIGCONT handlers that set the flags [`take_winch`]/[`take_cont`]
    /// observe. Idempotent: calling this while already raw is a no-op.
    pub fn enable_raw(&mut self) -> Result<()> {
        if self.saved_termios.is_some() {
            return Ok(());
        }
        let mut orig: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(self.infd, &mut orig) } == -1 {
            return Err(ReadlineError::NoTerminal);
        }
        let raw = Self::raw_termios_from(&orig);
        if unsafe { libc::tcsetattr(self.infd, libc::TCSANOW, &raw) } == -1 {
            return Err(ReadlineError::NoTerminal);
        }
        self.saved_termios = Some(orig);
        GOT_WINCH.store(false, Ordering::SeqCst);
        GOT_CONT.store(false, Ordering::SeqCst);
        self.saved_winch = Some(install_handler(libc::SIGWINCH, on_winch, 0));
        self.saved_cont = Some(install_handler(libc::SIGCONT, on_cont, 0));
        tracing::debug!(message = "raw mode enabled", infd = self.infd, outfd = self.outfd);
        Ok(())
    }

    fn raw_termios_from(orig: &libc::termios) -> libc::termios {
        let mut raw = *orig;
        raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP);
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN);
        raw.c_oflag &= !libc::OPOST;
        raw.c_iflag |= libc_iutf8();
        raw.c_cflag |= libc::CS8;
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;
        raw
    }

    /// Re-applies the raw-mode termios without re-snapshotting, for the case where
    /// a SIGCONT (resume from suspend) may have reset terminal attributes to
    /// whatever the shell left them in. A no-op if raw mode was never enabled.
    pub fn reapply_raw(&self) -> Result<()> {
        if let Some(orig) = &self.saved_termios {
            let raw = Self::raw_termios_from(orig);
            if unsafe { libc::tcsetattr(self.infd, libc::TCSANOW, &raw) } == -1 {
                return Err(ReadlineError::NoTerminal);
            }
        }
        Ok(())
    }

    /// Restores whatever the terminal attributes and signal handlers were before
    /// [`enable_raw`]. Safe to call repeatedly or when never enabled.
    pub fn disable_raw(&mut self) {
        if let Some(orig) = self.saved_termios.take() {
            unsafe { libc::tcsetattr(self.infd, libc::TCSAFLUSH, &orig) };
            tracing::debug!(message = "raw mode disabled", infd = self.infd);
        }
        if let Some(old) = self.saved_winch.take() {
            restore_handler(libc::SIGWINCH, &old);
        }
        if let Some(old) = self.saved_cont.take() {
            restore_handler(libc::SIGCONT, &old);
        }
    }

    /// Writes `bytes` in full, retrying on `EINTR` and waiting on `poll(POLLOUT)`
    /// when the (possibly non-blocking) fd isn't ready yet.
    pub fn write_all(&self, mut bytes: &[u8]) -> Result<()> {
        while !bytes.is_empty() {
            let rc = unsafe { libc::write(self.outfd, bytes.as_ptr() as *const libc::c_void, bytes.len()) };
            match rc {
                n if n > 0 => bytes = &bytes[n as usize..],
                _ => {
                    let err = io::Error::last_os_error();
                    match err.kind() {
                        io::ErrorKind::Interrupted => continue,
                        io::ErrorKind::WouldBlock => {
                            wait_ready(self.outfd, libc::POLLOUT)?;
                        }
                        _ => return Err(ReadlineError::Io(err)),
                    }
                }
            }
        }
        Ok(())
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        self.disable_raw();
    }
}

/// The I/O surface the editor loop drives: a [`ByteSource`] to read keystrokes from,
/// plus the handful of terminal-shaped operations (writing a frame, reading the
/// window size, surviving a suspend/resume) the loop needs between reads.
/// [`RawTerminal`] implements this over real fds; [`crate::pipe_terminal::PipeTerminal`]
/// implements it over in-memory buffers so the editor loop can be driven end-to-end
/// in tests without a pty.
pub trait Terminal: ByteSource {
    /// Writes a repaint frame (or any other output) in full.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Current window size, re-probed on demand (e.g. after a SIGWINCH).
    fn window_size(&mut self) -> WindowSize;

    /// Re-applies raw-mode terminal attributes after a SIGCONT. A no-op for
    /// terminals with nothing OS-level to restore.
    fn reapply_raw(&mut self) -> Result<()> {
        Ok(())
    }

    /// Restores whatever terminal state raw-mode editing disturbed. A no-op for
    /// terminals with nothing OS-level to restore.
    fn disable_raw(&mut self) {}
}

impl Terminal for RawTerminal {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        RawTerminal::write_all(self, bytes)
    }

    fn window_size(&mut self) -> WindowSize {
        get_terminal_size(self.infd, self.outfd)
    }

    fn reapply_raw(&mut self) -> Result<()> {
        RawTerminal::reapply_raw(self)
    }

    fn disable_raw(&mut self) {
        RawTerminal::disable_raw(self)
    }
}

/// Installs SIGINT/SIGQUIT handlers for the duration of `f`, restoring whatever was
/// there before on every exit path. If either signal fires, `f`'s current blocking
/// read is interrupted (no `SA_RESTART`), and this returns
/// `Err(ReadlineError::Signal(sig))` instead of `f`'s own result, so the caller can
/// restore cooked mode and re-raise the same signal to the process. A free function
/// rather than a `RawTerminal` method: it only touches the process-wide signal
/// table, not this terminal's fd, and a method would force overlapping
/// mutable/immutable borrows of the `RawTerminal` the editor loop is also driving.
pub fn guard_terminating_signals<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    CAUGHT_SIGNAL.store(0, Ordering::SeqCst);
    let old_int = install_handler(libc::SIGINT, on_terminating_signal, libc::SA_NODEFER);
    let old_quit = install_handler(libc::SIGQUIT, on_terminating_signal, libc::SA_NODEFER);
    let result = f();
    restore_handler(libc::SIGINT, &old_int);
    restore_handler(libc::SIGQUIT, &old_quit);
    match take_caught_signal() {
        Some(sig) => {
            tracing::debug!(message = "caught terminating signal", signal = sig);
            Err(ReadlineError::Signal(sig))
        }
        None => result,
    }
}

fn wait_ready(fd: RawFd, events: libc::c_short) -> Result<()> {
    let mut pfd = libc::pollfd { fd, events, revents: 0 };
    loop {
        let rc = unsafe { libc::poll(&mut pfd, 1, -1) };
        if rc >= 0 {
            return Ok(());
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(ReadlineError::Io(err));
        }
        if let Some(sig) = take_caught_signal() {
            CAUGHT_SIGNAL.store(sig, Ordering::SeqCst);
            return Err(ReadlineError::Signal(sig));
        }
    }
}

#[cfg(target_os = "macos")]
fn libc_iutf8() -> libc::tcflag_t {
    0
}

#[cfg(not(target_os = "macos"))]
fn libc_iutf8() -> libc::tcflag_t {
    libc::IUTF8
}

impl ByteSource for RawTerminal {
    /// Reads one byte, retrying on `EINTR` and waiting on `poll(POLLIN)` when the fd
    /// isn't ready (the fd may be non-blocking). A `SIGINT`/`SIGQUIT` observed while
    /// waiting surfaces as `Err` with [`io::ErrorKind::Interrupted`]; the caller
    /// (the editor loop, via [`guard_terminating_signals`]) is what turns that into a
    /// tagged [`ReadlineError::Signal`].
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte: u8 = 0;
        loop {
            let rc = unsafe { libc::read(self.infd, &mut byte as *mut u8 as *mut libc::c_void, 1) };
            match rc {
                1 => return Ok(Some(byte)),
                0 => return Ok(None),
                _ => {
                    let err = io::Error::last_os_error();
                    match err.kind() {
                        io::ErrorKind::Interrupted => {
                            if let Some(sig) = take_caught_signal() {
                                // Put it back: `guard_terminating_signals` is the one
                                // that turns this into `ReadlineError::Signal` once
                                // control unwinds back to it.
                                CAUGHT_SIGNAL.store(sig, Ordering::SeqCst);
                                return Err(io::Error::from(io::ErrorKind::Interrupted));
                            }
                            continue;
                        }
                        io::ErrorKind::WouldBlock => {
                            tracing::trace!(message = "read would block, polling", infd = self.infd);
                            let mut pfd = libc::pollfd { fd: self.infd, events: libc::POLLIN, revents: 0 };
                            let prc = unsafe { libc::poll(&mut pfd, 1, -1) };
                            if prc < 0 {
                                let perr = io::Error::last_os_error();
                                if perr.kind() != io::ErrorKind::Interrupted {
                                    return Err(perr);
                                }
                            }
                        }
                        _ => return Err(err),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_window_size_is_24x80() {
        assert_eq!(WindowSize::FALLBACK, WindowSize { rows: 24, cols: 80 });
    }

    #[test]
    fn take_winch_clears_after_reading() {
        GOT_WINCH.store(true, Ordering::SeqCst);
        assert!(take_winch());
        assert!(!take_winch());
    }

    #[test]
    fn take_cont_clears_after_reading() {
        GOT_CONT.store(true, Ordering::SeqCst);
        assert!(take_cont());
        assert!(!take_cont());
    }

    #[test]
    fn raw_terminal_disable_before_enable_is_a_noop() {
        let mut term = RawTerminal::new(0, 1);
        term.disable_raw();
        assert!(!term.is_raw());
    }
}
