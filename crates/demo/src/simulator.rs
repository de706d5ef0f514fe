//! Payment traffic simulator
//!
//! Generates random payment attempts and emits them as structured events:
//! human-oriented order/payment messages, plus one `PaymentProcessed` event
//! per attempt carrying the full payment property set.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use paylog_events::{Level, LogEvent};
use paylog_pipeline::Logger;

/// Users issuing payments
const USERS: [&str; 4] = ["alice", "bob", "carol", "dave"];

/// Available payment methods
const METHODS: [&str; 3] = ["CreditCard", "PayPal", "WireTransfer"];

/// Reasons an attempt can fail
const FAILURE_REASONS: [&str; 2] = ["Out of stock", "Payment declined"];

/// Probability that an attempt succeeds
const SUCCESS_RATE: f64 = 0.8;

/// Random payment attempt generator
pub struct Simulator {
    rng: StdRng,
}

impl Simulator {
    /// Create a simulator; a seed makes the run reproducible
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Emit `count` payment attempts through the logger
    pub fn run(&mut self, logger: &Logger, count: usize) {
        for _ in 0..count {
            self.attempt(logger);
        }
        tracing::debug!(count, "simulation complete");
    }

    /// One payment attempt: order events plus the projection event
    fn attempt(&mut self, logger: &Logger) {
        let user = USERS[self.rng.gen_range(0..USERS.len())];
        let method = METHODS[self.rng.gen_range(0..METHODS.len())];
        let order_id = Uuid::new_v4().to_string();
        let payment_id = Uuid::new_v4().to_string();
        let amount = (self.rng.gen::<f64>() * 200.0 * 100.0).round() / 100.0;
        let processed_at = Utc::now();
        let succeeded = self.rng.gen_bool(SUCCESS_RATE);

        if succeeded {
            logger.emit(
                LogEvent::new(Level::Info, "Order {OrderId} placed by {UserId} for {Amount}")
                    .with("OrderId", order_id.as_str())
                    .with("UserId", user)
                    .with("Amount", amount)
                    .with("Status", "Success"),
            );
            logger.emit(
                LogEvent::new(Level::Info, "Payment succeeded for user {UserId} and order {OrderId}")
                    .with("UserId", user)
                    .with("OrderId", order_id.as_str()),
            );
        } else {
            let reason = FAILURE_REASONS[self.rng.gen_range(0..FAILURE_REASONS.len())];
            logger.emit(
                LogEvent::new(Level::Warning, "Order {OrderId} by {UserId} failed: {Reason}")
                    .with("OrderId", order_id.as_str())
                    .with("UserId", user)
                    .with("Reason", reason)
                    .with("Status", "Failed"),
            );
            logger.emit(
                LogEvent::new(Level::Warning, "Payment failed for order {OrderId}. Reason: {Reason}")
                    .with("OrderId", order_id.as_str())
                    .with("Reason", reason),
            );
        }

        let status = if succeeded { "Succeeded" } else { "Failed" };
        logger.emit(
            LogEvent::new(Level::Info, "PaymentProcessed")
                .with("EventType", "PaymentProcessed")
                .with("PaymentId", payment_id)
                .with("OrderId", order_id)
                .with("UserId", user)
                .with("Amount", amount)
                .with("Currency", "USD")
                .with("Method", method)
                .with("Status", status)
                .with("ProcessedAt", processed_at),
        );
    }
}

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;
