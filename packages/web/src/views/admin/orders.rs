use api::{OrderStatus, PageRequest};
use dioxus::prelude::*;
use ui::{format, use_session, use_submit_guard, StatusBadge};

use super::{Feedback, FeedbackBanner, LISTING_SIZE};

#[component]
pub(super) fn OrdersTab() -> Element {
    let session = use_session();
    let mut feedback = Feedback::use_new();
    let mut guard = use_submit_guard();

    let mut orders = use_resource(move || async move {
        let mut session = session;
        session
            .client()
            .all_orders(PageRequest::new(0, LISTING_SIZE))
            .await
            .map(|page| page.content)
            .map_err(|e| session.error_message(&e))
    });

    let mut set_status = move |order_id: i64, status: OrderStatus| {
        feedback.clear();
        let Some(ticket) = guard.begin() else {
            return;
        };
        spawn(async move {
            let _ticket = ticket;
            let mut session = session;
            match session.client().update_order_status(order_id, status).await {
                Ok(_) => {
                    feedback.done(format!("Order #{order_id} marked {status}"));
                    orders.restart();
                }
                Err(e) => feedback.fail(session.error_message(&e)),
            }
        });
    };

    rsx! {
        FeedbackBanner { error: (feedback.error)(), success: (feedback.success)() }
        match &*orders.read_unchecked() {
            None => rsx! { p { class: "text-gray-500", "Loading..." } },
            Some(Err(message)) => rsx! { ui::ErrorBanner { message: message.clone() } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "w-full bg-white rounded-xl shadow-sm text-sm",
                    thead {
                        tr {
                            th { class: "p-3 text-left", "Order" }
                            th { class: "p-3 text-left", "Customer" }
                            th { class: "p-3 text-left", "Date" }
                            th { class: "p-3 text-right", "Total" }
                            th { class: "p-3", "Status" }
                            th { class: "p-3" }
                        }
                    }
                    tbody {
                        for order in list.iter().cloned() {
                            tr {
                                key: "{order.id}",
                                class: "border-t",
                                td { class: "p-3", "#{order.id}" }
                                td { class: "p-3", {order.user_name.clone().unwrap_or_default()} }
                                td { class: "p-3", {format::date(order.created_at.as_deref())} }
                                td { class: "p-3 text-right", {format::price(order.total_amount)} }
                                td {
                                    class: "p-3",
                                    StatusBadge { status: order.status }
                                    select {
                                        class: "ml-2 px-2 py-1 border rounded",
                                        value: order.status.as_str(),
                                        disabled: guard.is_busy(),
                                        onchange: move |evt: FormEvent| {
                                            match evt.value().parse::<OrderStatus>() {
                                                Ok(status) if status != order.status => set_status(order.id, status),
                                                Ok(_) => {}
                                                Err(message) => feedback.fail(message),
                                            }
                                        },
                                        for status in OrderStatus::ALL {
                                            option { key: "{status}", value: status.as_str(), "{status}" }
                                        }
                                    }
                                }
                                td {
                                    class: "p-3 text-right",
                                    button {
                                        class: "text-red-600",
                                        disabled: guard.is_busy(),
                                        onclick: move |_| async move {
                                            let Some(_ticket) = guard.begin() else {
                                                return;
                                            };
                                            let mut session = session;
                                            match session.client().delete_order(order.id).await {
                                                Ok(_) => {
                                                    feedback.done(format!("Order #{} deleted", order.id));
                                                    orders.restart();
                                                }
                                                Err(e) => feedback.fail(session.error_message(&e)),
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
