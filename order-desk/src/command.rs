//! Desk commands parsed from one line of input

use shared::error::{AppError, AppResult, ErrorCode};
use shared::order::TipPercent;
use std::str::FromStr;

pub const HELP: &str = "\
Comandos:
  cantidad <id> <n>   fija la cantidad de un platillo (0 lo elimina)
  eliminar <id>       elimina un platillo del pedido
  propina <10|25|50>  selecciona la propina
  resumen             muestra el pedido
  menu                muestra los platillos
  ayuda               muestra esta ayuda
  salir               termina";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskCommand {
    Quantity { dish_id: i64, quantity: i64 },
    Remove { dish_id: i64 },
    Tip(TipPercent),
    Show,
    Menu,
    Help,
    Quit,
}

fn parse_int(value: Option<&str>, what: &str) -> AppResult<i64> {
    let raw = value.ok_or_else(|| AppError::invalid_request(format!("missing {}", what)))?;
    raw.parse().map_err(|_| {
        AppError::invalid_request(format!("{} must be an integer, got {:?}", what, raw))
            .with_detail("value", raw)
    })
}

impl FromStr for DeskCommand {
    type Err = AppError;

    fn from_str(line: &str) -> AppResult<Self> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(Self::Show);
        };

        let command = match verb.to_lowercase().as_str() {
            "cantidad" | "qty" | "c" => Self::Quantity {
                dish_id: parse_int(parts.next(), "dish id")?,
                quantity: parse_int(parts.next(), "quantity")?,
            },
            "eliminar" | "rm" => Self::Remove {
                dish_id: parse_int(parts.next(), "dish id")?,
            },
            "propina" | "tip" => {
                let percent = parse_int(parts.next(), "tip percent")?;
                let percent = u32::try_from(percent).map_err(|_| {
                    AppError::with_message(
                        ErrorCode::ValueOutOfRange,
                        format!("tip percent out of range: {}", percent),
                    )
                })?;
                Self::Tip(TipPercent::try_from(percent)?)
            }
            "resumen" | "show" => Self::Show,
            "menu" => Self::Menu,
            "ayuda" | "help" | "?" => Self::Help,
            "salir" | "quit" | "exit" => Self::Quit,
            other => {
                return Err(AppError::invalid_request(format!("unknown command: {}", other))
                    .with_detail("command", other));
            }
        };

        if let Some(extra) = parts.next() {
            return Err(AppError::invalid_request(format!("unexpected argument: {}", extra)));
        }
        Ok(command)
    }
}
