use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use super::format::{error_message, format_amount};
use super::input::TokenReader;
use super::menu::{CurrencyPair, Menu};
use super::ui::{self, StyleType};
use crate::core::currency::ExchangeRateProvider;
use crate::service::ConversionService;

const BANNER_RULE: &str = "****************************************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    MenuLoop,
    Terminated,
}

/// Menu-driven loop: pick a pair, enter an amount, print the conversion.
/// Each conversion completes before the next prompt is shown.
pub struct Shell<'a, P, R, W> {
    service: &'a ConversionService<P>,
    menu: Menu,
    input: TokenReader<R>,
    output: W,
}

impl<'a, P, R, W> Shell<'a, P, R, W>
where
    P: ExchangeRateProvider,
    R: BufRead,
    W: Write,
{
    pub fn new(service: &'a ConversionService<P>, input: R, output: W) -> Self {
        Self {
            service,
            menu: Menu::standard(),
            input: TokenReader::new(input),
            output,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.print_banner()?;

        let mut state = ShellState::MenuLoop;
        while state == ShellState::MenuLoop {
            state = self.step().await?;
        }

        info!("Shell terminated");
        Ok(())
    }

    async fn step(&mut self) -> Result<ShellState> {
        self.print_menu()?;

        let Some(selection) = self.input.read_selection().context("Failed to read option")?
        else {
            debug!("End of input while reading option");
            return self.farewell();
        };

        if selection == self.menu.exit_option() {
            return self.farewell();
        }

        let Some(pair) = self.menu.pair(selection) else {
            writeln!(self.output, "{}", self.menu.invalid_option_message())?;
            return Ok(ShellState::MenuLoop);
        };

        write!(self.output, "Ingresa el valor que deseas convertir: ")?;
        self.output.flush()?;

        let Some(amount) = self.input.read_amount().context("Failed to read amount")? else {
            debug!("End of input while reading amount");
            return self.farewell();
        };

        match amount {
            Some(amount) if amount > 0.0 => self.convert(pair, amount).await?,
            _ => writeln!(self.output, "Por favor ingresa un valor numérico positivo.")?,
        }

        Ok(ShellState::MenuLoop)
    }

    async fn convert(&mut self, pair: CurrencyPair, amount: f64) -> Result<()> {
        debug!(origin = pair.origin, target = pair.target, amount, "Converting");

        let spinner = ui::new_spinner("Consultando la tasa de cambio...");
        let outcome = self.service.convertir(pair.origin, pair.target, amount).await;
        spinner.finish_and_clear();

        let line = match outcome {
            Ok(result) => {
                debug!(rate = result.conversion_rate, "Conversion rate");
                let sentence = format!(
                    "El valor de {} {} corresponde al valor final de {} {}.",
                    format_amount(result.original_amount),
                    result.base_name,
                    format_amount(result.converted_amount),
                    result.target_name
                );
                ui::style_text(&sentence, StyleType::Result)
            }
            Err(e) => {
                debug!(error = %e, "Conversion failed");
                ui::style_text(&error_message(&e), StyleType::Error)
            }
        };

        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{BANNER_RULE}")?;
        writeln!(
            self.output,
            "{}",
            ui::style_text("   Bienvenido al Conversor de Monedas   ", StyleType::Title)
        )?;
        writeln!(self.output, "{BANNER_RULE}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for line in self.menu.lines(self.service.names()) {
            writeln!(self.output, "{line}")?;
        }
        write!(self.output, "{}", self.menu.prompt())?;
        self.output.flush()?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<ShellState> {
        writeln!(self.output, "Hasta luego.")?;
        Ok(ShellState::Terminated)
    }
}
