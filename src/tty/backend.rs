//! Terminal backends.
//!
//! The console driver talks to anything implementing [`Terminal`]: a byte
//! stream in both directions plus the ability to switch input to cbreak mode
//! for the length of a status report round trip.

use std::io::{self, Read, Write};

/// A terminal the console driver can draw to.
pub trait Terminal: Read + Write {
    /// Restores the previous input mode when dropped.
    type CbreakGuard;

    /// Save the current input mode and switch to cbreak.
    ///
    /// Cbreak means no line buffering and no echo, so a status report can be
    /// read back byte by byte without the user seeing it.
    fn enter_cbreak(&mut self) -> io::Result<Self::CbreakGuard>;
}

#[cfg(unix)]
pub use self::unix::{StdCbreakGuard, StdTerminal};

#[cfg(unix)]
mod unix {
    use std::io::{self, IsTerminal, Read, Write};
    use std::mem::MaybeUninit;
    use std::os::unix::io::RawFd;

    use super::Terminal;

    /// The process' controlling terminal: stdin for responses, stdout for output.
    #[derive(Debug)]
    pub struct StdTerminal {
        stdin: io::Stdin,
        stdout: io::Stdout,
    }

    impl StdTerminal {
        pub fn new() -> Self {
            Self {
                stdin: io::stdin(),
                stdout: io::stdout(),
            }
        }

        /// Whether both stdin and stdout are attached to a terminal.
        pub fn is_tty() -> bool {
            io::stdin().is_terminal() && io::stdout().is_terminal()
        }
    }

    impl Default for StdTerminal {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Read for StdTerminal {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.stdin.read(buf)
        }
    }

    impl Write for StdTerminal {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.stdout.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.stdout.flush()
        }
    }

    impl Terminal for StdTerminal {
        type CbreakGuard = StdCbreakGuard;

        fn enter_cbreak(&mut self) -> io::Result<StdCbreakGuard> {
            StdCbreakGuard::acquire(libc::STDIN_FILENO)
        }
    }

    /// Saved termios attributes, written back on drop.
    pub struct StdCbreakGuard {
        fd: RawFd,
        saved: libc::termios,
    }

    impl StdCbreakGuard {
        fn acquire(fd: RawFd) -> io::Result<Self> {
            let mut attrs = MaybeUninit::<libc::termios>::uninit();
            // SAFETY: tcgetattr fully initializes `attrs` when it returns 0.
            let saved = unsafe {
                if libc::tcgetattr(fd, attrs.as_mut_ptr()) != 0 {
                    return Err(io::Error::last_os_error());
                }
                attrs.assume_init()
            };

            let mut cbreak = saved;
            cbreak.c_lflag &= !(libc::ECHO | libc::ICANON);
            cbreak.c_cc[libc::VMIN] = 1;
            cbreak.c_cc[libc::VTIME] = 0;

            // SAFETY: `cbreak` is a valid termios copied from the terminal.
            if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &cbreak) } != 0 {
                return Err(io::Error::last_os_error());
            }

            Ok(Self { fd, saved })
        }
    }

    impl Drop for StdCbreakGuard {
        fn drop(&mut self) {
            // SAFETY: `saved` came from tcgetattr on the same descriptor.
            if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved) } != 0 {
                tracing::warn!(
                    "Failed to restore terminal attributes: {}",
                    io::Error::last_os_error()
                );
            }
        }
    }

    impl std::fmt::Debug for StdCbreakGuard {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("StdCbreakGuard").field("fd", &self.fd).finish()
        }
    }
}
