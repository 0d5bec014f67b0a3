//! The fixed menu of currency pairs offered by the shell.

use crate::service::CurrencyNames;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPair {
    pub origin: &'static str,
    pub target: &'static str,
}

impl CurrencyPair {
    const fn new(origin: &'static str, target: &'static str) -> Self {
        Self { origin, target }
    }
}

/// Menu options 1..=N map to currency pairs; option N + 1 exits.
#[derive(Debug, Clone)]
pub struct Menu {
    pairs: Vec<CurrencyPair>,
}

impl Menu {
    pub fn standard() -> Self {
        Self {
            pairs: vec![
                CurrencyPair::new("USD", "ARS"),
                CurrencyPair::new("ARS", "USD"),
                CurrencyPair::new("USD", "BRL"),
                CurrencyPair::new("BRL", "USD"),
                CurrencyPair::new("USD", "COP"),
                CurrencyPair::new("COP", "USD"),
                CurrencyPair::new("USD", "BOB"),
            ],
        }
    }

    pub fn exit_option(&self) -> i32 {
        self.pairs.len() as i32 + 1
    }

    pub fn pair(&self, selection: i32) -> Option<CurrencyPair> {
        let index = usize::try_from(selection).ok()?.checked_sub(1)?;
        self.pairs.get(index).copied()
    }

    /// One line per option, including the exit entry.
    pub fn lines(&self, names: &CurrencyNames) -> Vec<String> {
        let label = |code: &str| format!("{} ({code})", capitalize(names.display_name(code)));

        let mut lines: Vec<String> = self
            .pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| {
                format!("{}) {} → {}", i + 1, label(pair.origin), label(pair.target))
            })
            .collect();
        lines.push(format!("{}) Salir", self.exit_option()));
        lines
    }

    pub fn prompt(&self) -> String {
        format!("Elige una opción (1-{}): ", self.exit_option())
    }

    pub fn invalid_option_message(&self) -> String {
        format!(
            "Opción no válida. Elige un número del 1 al {}.",
            self.exit_option()
        )
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table() {
        let menu = Menu::standard();
        let expected = [
            (1, "USD", "ARS"),
            (2, "ARS", "USD"),
            (3, "USD", "BRL"),
            (4, "BRL", "USD"),
            (5, "USD", "COP"),
            (6, "COP", "USD"),
            (7, "USD", "BOB"),
        ];
        for (selection, origin, target) in expected {
            assert_eq!(
                menu.pair(selection),
                Some(CurrencyPair { origin, target }),
                "selection {selection}"
            );
        }
    }

    #[test]
    fn test_out_of_range_selections() {
        let menu = Menu::standard();
        assert_eq!(menu.exit_option(), 8);
        for selection in [-1, 0, 8, 9, i32::MIN, i32::MAX] {
            assert!(menu.pair(selection).is_none(), "selection {selection}");
        }
    }

    #[test]
    fn test_menu_lines() {
        let menu = Menu::standard();
        let lines = menu.lines(&CurrencyNames::default());

        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "1) Dólares estadounidenses (USD) → Pesos argentinos (ARS)"
        );
        assert_eq!(lines[6], "7) Dólares estadounidenses (USD) → Bolivianos (BOB)");
        assert_eq!(lines[7], "8) Salir");
        assert_eq!(menu.prompt(), "Elige una opción (1-8): ");
    }
}
