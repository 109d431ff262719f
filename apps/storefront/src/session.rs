//! # Session Module
//!
//! Command parsing and dispatch for the terminal loop.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Loop Iteration                               │
//! │                                                                         │
//! │  read line ──► Command::parse ──► Session::dispatch ──► print reply    │
//! │                     │                    │                              │
//! │                     │ parse error        │ dispatch error               │
//! │                     └────────────────────┴──► print "error: ..."       │
//! │                                                (loop continues)         │
//! │                                                                         │
//! │  Only `quit`/`exit` (or end of input) leaves the loop.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session owns one Guest customer, the catalog, and the most recent
//! order. Business rules stay in taiga-core; this module only resolves
//! catalog ids, applies the checkout name policy, and renders replies.

use std::io::{self, BufRead, Write};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use taiga_core::{Customer, IdGenerator, Order, UuidIds};

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::render;

// =============================================================================
// Commands
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Add { id: String, quantity: u32 },
    Remove { id: String },
    Clear,
    Cart,
    Checkout { name: String },
    Export,
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// The command word is case-insensitive; arguments keep their case.
    /// A blank line parses to `Help` (the run loop skips blanks anyway).
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = words.first() else {
            return Ok(Command::Help);
        };

        match first.to_ascii_lowercase().as_str() {
            "help" => Ok(Command::Help),
            "list" => Ok(Command::List),
            "add" => {
                let id = words.get(1).ok_or(AppError::Usage("add <id> [qty]"))?;
                let quantity = match words.get(2) {
                    None => 1,
                    Some(raw) => parse_quantity(raw)?,
                };
                Ok(Command::Add {
                    id: id.to_string(),
                    quantity,
                })
            }
            "remove" => {
                let id = words.get(1).ok_or(AppError::Usage("remove <id>"))?;
                Ok(Command::Remove { id: id.to_string() })
            }
            "clear" => Ok(Command::Clear),
            "cart" => Ok(Command::Cart),
            "checkout" => {
                if words.len() < 2 {
                    return Err(AppError::Usage("checkout <name>"));
                }
                Ok(Command::Checkout {
                    name: words[1..].join(" "),
                })
            }
            "export" => Ok(Command::Export),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_quantity(raw: &str) -> Result<u32, AppError> {
    match raw.parse::<u32>() {
        Ok(qty) if qty >= 1 => Ok(qty),
        _ => Err(AppError::InvalidQuantity(raw.to_string())),
    }
}

/// Checkout name rule: 2 to 30 characters, letters and spaces only.
fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[a-zA-Z ]{2,30}$").expect("pattern is valid"))
}

// =============================================================================
// Session
// =============================================================================

/// One storefront session: a Guest customer shopping from the catalog.
pub struct Session {
    customer: Customer,
    catalog: Catalog,
    last_order: Option<Order>,
    order_ids: Box<dyn IdGenerator>,
}

impl Session {
    /// Creates a session with random customer and order ids.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ids(catalog, &UuidIds, Box::new(UuidIds))
    }

    /// Creates a session with injected id generators, for scripted runs
    /// and tests that need stable ids in the output.
    pub fn with_ids(
        catalog: Catalog,
        customer_ids: &dyn IdGenerator,
        order_ids: Box<dyn IdGenerator>,
    ) -> Self {
        Session {
            customer: Customer::with_ids("Guest", customer_ids),
            catalog,
            last_order: None,
            order_ids,
        }
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    ///
    /// Errors are printed and the loop continues; only I/O failure on the
    /// streams themselves ends the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = Command::parse(&line);
            let quitting = matches!(command, Ok(Command::Quit));

            match command.and_then(|cmd| self.dispatch(cmd)) {
                Ok(reply) => writeln!(output, "{}", reply)?,
                Err(err) => writeln!(output, "error: {}", err)?,
            }

            if quitting {
                break;
            }
        }

        Ok(())
    }

    /// Executes one command and returns the text to print.
    pub fn dispatch(&mut self, command: Command) -> Result<String, AppError> {
        debug!(?command, "Dispatching");

        match command {
            Command::Help => Ok(render::HELP.to_string()),
            Command::List => Ok(render::catalog_table(&self.catalog)),
            Command::Add { id, quantity } => self.add(&id, quantity),
            Command::Remove { id } => self.remove(&id),
            Command::Clear => {
                self.customer.clear_cart();
                Ok("Cart cleared.".to_string())
            }
            Command::Cart => Ok(render::cart_table(self.customer.cart())),
            Command::Checkout { name } => self.checkout(&name),
            Command::Export => self.export(),
            Command::Quit => Ok("Goodbye!".to_string()),
        }
    }

    /// Resolves the id in the catalog and adds the product `quantity` times.
    fn add(&mut self, id: &str, quantity: u32) -> Result<String, AppError> {
        let product = self
            .catalog
            .find(id)
            .ok_or_else(|| AppError::UnknownProduct(id.to_string()))?;

        for _ in 0..quantity {
            self.customer.add_to_cart(product);
        }

        debug!(product_id = %product.id(), quantity, "Added to cart");

        Ok(format!(
            "Added {} x{} (cart total: {})",
            product.name(),
            quantity,
            self.customer.cart_total(),
        ))
    }

    /// Resolves the id in the catalog and drops its line from the cart.
    ///
    /// An id that exists in the catalog but not in the cart is fine: the
    /// cart treats that removal as a no-op.
    fn remove(&mut self, id: &str) -> Result<String, AppError> {
        let product = self
            .catalog
            .find(id)
            .ok_or_else(|| AppError::UnknownProduct(id.to_string()))?;

        self.customer.remove_from_cart(product);

        debug!(product_id = %product.id(), "Removed from cart");

        Ok(format!("Removed {} from the cart.", product.name()))
    }

    /// Applies the name policy, places the order, and prints summary plus
    /// receipt. A rejected name changes nothing.
    fn checkout(&mut self, name: &str) -> Result<String, AppError> {
        if !name_pattern().is_match(name) {
            return Err(AppError::InvalidName);
        }

        self.customer.set_name(name);
        let order = self.customer.place_order_with(self.order_ids.as_ref())?;

        info!(order_id = %order.id(), total = %order.total(), "Order placed");

        let reply = format!(
            "{}\n\n{}",
            render::order_summary(&order),
            order.generate_receipt(),
        );
        self.last_order = Some(order);
        Ok(reply)
    }

    /// Serializes the most recent order as pretty JSON.
    fn export(&self) -> Result<String, AppError> {
        let order = self.last_order.as_ref().ok_or(AppError::NoOrder)?;
        Ok(serde_json::to_string_pretty(order)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use std::io::Cursor;
    use taiga_core::{CoreError, SequentialIds};

    fn test_session() -> Session {
        Session::with_ids(
            sample_catalog().unwrap(),
            &SequentialIds::new("CUST"),
            Box::new(SequentialIds::new("ORD")),
        )
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("cart").unwrap(), Command::Cart);
        assert_eq!(Command::parse("clear").unwrap(), Command::Clear);
        assert_eq!(Command::parse("export").unwrap(), Command::Export);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_is_case_insensitive_on_the_command_word() {
        assert_eq!(Command::parse("LIST").unwrap(), Command::List);
        assert_eq!(
            Command::parse("ADD P001 2").unwrap(),
            Command::Add {
                id: "P001".to_string(),
                quantity: 2
            }
        );
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add p003").unwrap(),
            Command::Add {
                id: "p003".to_string(),
                quantity: 1
            }
        );
        assert_eq!(
            Command::parse("add p003 4").unwrap(),
            Command::Add {
                id: "p003".to_string(),
                quantity: 4
            }
        );

        assert!(matches!(Command::parse("add"), Err(AppError::Usage(_))));
        assert!(matches!(
            Command::parse("add p003 0"),
            Err(AppError::InvalidQuantity(_))
        ));
        assert!(matches!(
            Command::parse("add p003 lots"),
            Err(AppError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_parse_checkout_joins_name_words() {
        assert_eq!(
            Command::parse("checkout Alice Smith").unwrap(),
            Command::Checkout {
                name: "Alice Smith".to_string()
            }
        );
        assert!(matches!(
            Command::parse("checkout"),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            Command::parse("frobnicate hard"),
            Err(AppError::UnknownCommand(word)) if word == "frobnicate"
        ));
    }

    #[test]
    fn test_add_and_cart_flow() {
        let mut session = test_session();

        let reply = session
            .dispatch(Command::parse("add p001").unwrap())
            .unwrap();
        assert_eq!(reply, "Added Laptop Pro x1 (cart total: $1299.99)");

        session
            .dispatch(Command::parse("add P003 2").unwrap())
            .unwrap();

        let cart = session.dispatch(Command::Cart).unwrap();
        assert!(cart.contains("Items: 3"));
        assert!(cart.contains("Total: $1323.99"));
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = test_session();
        let result = session.dispatch(Command::parse("add p999").unwrap());

        assert!(matches!(result, Err(AppError::UnknownProduct(id)) if id == "p999"));
        assert!(session.customer.cart().is_empty());
    }

    #[test]
    fn test_remove_product_not_in_cart_is_fine() {
        let mut session = test_session();
        session.dispatch(Command::parse("add p001").unwrap()).unwrap();

        // In the catalog, not in the cart: the cart no-ops
        let reply = session.dispatch(Command::parse("remove p003").unwrap()).unwrap();
        assert_eq!(reply, "Removed Java Mug from the cart.");
        assert_eq!(session.customer.cart().line_count(), 1);

        // Not in the catalog at all: that is a user error
        assert!(matches!(
            session.dispatch(Command::parse("remove p999").unwrap()),
            Err(AppError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_checkout_rejects_bad_names() {
        let mut session = test_session();
        session.dispatch(Command::parse("add p001").unwrap()).unwrap();

        let too_long = "A".repeat(31);
        for bad in ["A", "Alice123", "Alice_Smith", too_long.as_str()] {
            let result = session.dispatch(Command::Checkout {
                name: bad.to_string(),
            });
            assert!(matches!(result, Err(AppError::InvalidName)), "{}", bad);
        }

        // Nothing happened: still Guest, cart still full
        assert_eq!(session.customer.name(), "Guest");
        assert_eq!(session.customer.cart().line_count(), 1);
    }

    #[test]
    fn test_checkout_with_empty_cart_fails() {
        let mut session = test_session();
        let result = session.dispatch(Command::Checkout {
            name: "Alice".to_string(),
        });

        assert!(matches!(result, Err(AppError::Core(CoreError::EmptyCart))));
    }

    #[test]
    fn test_checkout_prints_summary_and_receipt() {
        let mut session = test_session();
        session.dispatch(Command::parse("add p001").unwrap()).unwrap();
        session.dispatch(Command::parse("add p003 2").unwrap()).unwrap();

        let reply = session
            .dispatch(Command::Checkout {
                name: "Alice".to_string(),
            })
            .unwrap();

        assert!(reply.contains("--- ORDER ORD-1 ---"));
        assert!(reply.contains("Customer: Alice"));
        assert!(reply.contains("Java Mug          2     $12.00     $24.00"));
        assert!(reply.contains("Savings                             $6.00"));
        assert!(reply.contains("TOTAL                            $1323.99"));
        assert!(session.customer.cart().is_empty());
    }

    #[test]
    fn test_export_before_any_order() {
        let mut session = test_session();
        assert!(matches!(
            session.dispatch(Command::Export),
            Err(AppError::NoOrder)
        ));
    }

    #[test]
    fn test_export_after_checkout() {
        let mut session = test_session();
        session.dispatch(Command::parse("add p001").unwrap()).unwrap();
        session
            .dispatch(Command::Checkout {
                name: "Alice".to_string(),
            })
            .unwrap();

        let json = session.dispatch(Command::Export).unwrap();
        assert!(json.contains("\"id\": \"ORD-1\""));
        assert!(json.contains("\"customer_name\": \"Alice\""));
        assert!(json.contains("\"total\": 1299.99"));
    }

    #[test]
    fn test_scripted_run() {
        let script = "\
list
add p001
add P003 2
frobnicate
cart
checkout Alice
export

quit
";
        let mut session = test_session();
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Laptop Pro"));
        assert!(text.contains("error: unknown command 'frobnicate', type 'help' for commands"));
        assert!(text.contains("Items: 3"));
        assert!(text.contains("--- ORDER ORD-1 ---"));
        assert!(text.contains("TOTAL                            $1323.99"));
        assert!(text.contains("\"id\": \"ORD-1\""));
        assert!(text.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_run_survives_checkout_errors() {
        let script = "checkout Alice\nadd p001\ncheckout A\ncheckout Alice\nquit\n";
        let mut session = test_session();
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("error: cannot place an order with an empty cart"));
        assert!(text.contains("error: checkout name must be 2-30 characters"));
        assert!(text.contains("--- ORDER ORD-1 ---"));
    }
}
