//! Order dialog message handlers
//!
//! Handles: OpenOrder, Order(OrderFormMessage)

use iced::Task;
use sales_widgets::{FormEvent, OrderFormMessage, OrderFormState};

use super::super::app::SalesDashboardApp;
use super::super::message::Message;
use crate::activity::Submission;

impl SalesDashboardApp {
    /// Handle OpenOrder message
    pub fn handle_open_order(&mut self) -> Task<Message> {
        self.order_form = OrderFormState::new(&self.config.defaults.order);
        self.order_open = true;
        self.report_open = false;
        log::info!("Order dialog opened");
        Task::none()
    }

    /// Handle a message from the order dialog
    pub fn handle_order_message(&mut self, message: OrderFormMessage) -> Task<Message> {
        if !self.order_open {
            log::debug!("Ignoring {:?}: order dialog is closed", message);
            return Task::none();
        }

        match self.order_form.update(message) {
            Some(FormEvent::Close) => {
                self.order_open = false;
                log::info!("Order dialog closed");
            }
            Some(FormEvent::Submit(order)) => {
                log::info!(
                    "Order created for {}: {} x {} (total {})",
                    order.customer,
                    order.quantity,
                    order.product,
                    order.total()
                );
                self.activity.record(Submission::Order(order));
                self.order_open = false;
            }
            None => {}
        }
        Task::none()
    }
}
