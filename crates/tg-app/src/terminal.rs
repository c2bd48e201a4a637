//! Taille du terminal : variables `COLUMNS`/`LINES`, sinon interrogation du
//! tty via crossterm.

use tg_core::traits::{TerminalProbe, TerminalSize};

/// Probe for the controlling terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Size from the `COLUMNS`/`LINES` pair, when both are set.
    ///
    /// An unparsable value counts as 0.
    ///
    /// # Example
    /// ```
    /// use tg_app::terminal::Terminal;
    /// use tg_core::traits::TerminalSize;
    ///
    /// let size = Terminal::from_env_values(Some("100".into()), Some("30".into()));
    /// assert_eq!(size, Some(TerminalSize { columns: 100, rows: 30 }));
    /// assert_eq!(Terminal::from_env_values(Some("100".into()), None), None);
    /// ```
    #[must_use]
    pub fn from_env_values(columns: Option<String>, lines: Option<String>) -> Option<TerminalSize> {
        let (columns, lines) = (columns?, lines?);
        Some(TerminalSize {
            columns: columns.trim().parse().unwrap_or(0),
            rows: lines.trim().parse().unwrap_or(0),
        })
    }

    fn from_tty() -> TerminalSize {
        match crossterm::terminal::size() {
            Ok((columns, rows)) => TerminalSize {
                columns: u32::from(columns),
                rows: u32::from(rows),
            },
            Err(e) => {
                log::debug!("Taille du terminal indisponible : {e}");
                TerminalSize::default()
            }
        }
    }
}

impl TerminalProbe for Terminal {
    fn size(&self) -> TerminalSize {
        let size = Self::from_env_values(std::env::var("COLUMNS").ok(), std::env::var("LINES").ok())
            .unwrap_or_else(Self::from_tty);
        log::debug!("Terminal : {}×{}", size.columns, size.rows);
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variables_required() {
        assert_eq!(Terminal::from_env_values(None, Some("24".into())), None);
        assert_eq!(Terminal::from_env_values(None, None), None);
    }

    #[test]
    fn garbage_counts_as_zero() {
        let size = Terminal::from_env_values(Some("wide".into()), Some("24".into())).unwrap();
        assert_eq!(size.columns, 0);
        assert_eq!(size.rows, 24);
        assert!(size.is_unknown());
    }
}
