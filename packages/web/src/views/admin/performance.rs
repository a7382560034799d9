use dioxus::prelude::*;
use ui::{use_session, use_submit_guard};

use super::{Feedback, FeedbackBanner};

#[component]
pub(super) fn PerformanceTab() -> Element {
    let session = use_session();
    let mut feedback = Feedback::use_new();
    let mut guard = use_submit_guard();

    let mut metrics = use_resource(move || async move {
        let mut session = session;
        let client = session.client();
        match (client.db_metrics().await, client.cache_metrics().await) {
            (Ok(db), Ok(cache)) => Ok((db, cache)),
            (Err(e), _) | (_, Err(e)) => Err(session.error_message(&e)),
        }
    });

    let clear = move |_: MouseEvent| async move {
        let Some(_ticket) = guard.begin() else {
            return;
        };
        feedback.clear();
        let mut session = session;
        match session.client().clear_metrics().await {
            Ok(_) => {
                feedback.done("Performance metrics cleared");
                metrics.restart();
            }
            Err(e) => feedback.fail(session.error_message(&e)),
        }
    };

    rsx! {
        FeedbackBanner { error: (feedback.error)(), success: (feedback.success)() }
        div {
            class: "flex items-center justify-between mb-6",
            h2 { class: "text-xl font-semibold text-gray-900", "Performance Metrics" }
            div {
                class: "flex gap-2",
                button {
                    class: "px-4 py-2 bg-gray-100 rounded-lg",
                    onclick: move |_| metrics.restart(),
                    "Refresh"
                }
                button {
                    class: "px-4 py-2 bg-red-600 text-white rounded-lg disabled:opacity-50",
                    disabled: guard.is_busy(),
                    onclick: clear,
                    "Clear"
                }
            }
        }
        match &*metrics.read_unchecked() {
            None => rsx! { p { class: "text-gray-500", "Loading..." } },
            Some(Err(message)) => rsx! { ui::ErrorBanner { message: message.clone() } },
            Some(Ok((db, cache))) => rsx! {
                h3 { class: "text-lg font-semibold text-gray-900 mb-4", "Database Queries" }
                table {
                    class: "w-full bg-white rounded-xl shadow-sm text-sm mb-8",
                    thead {
                        tr {
                            th { class: "p-3 text-left", "Query" }
                            th { class: "p-3 text-right", "Count" }
                            th { class: "p-3 text-right", "Avg Time" }
                            th { class: "p-3 text-right", "Min Time" }
                            th { class: "p-3 text-right", "Max Time" }
                            th { class: "p-3 text-right", "Total Time" }
                        }
                    }
                    tbody {
                        if db.is_empty() {
                            tr { td { class: "p-3 text-gray-500", colspan: "6", "No queries recorded yet." } }
                        }
                        for (query, metric) in db.iter() {
                            tr {
                                key: "{query}",
                                class: "border-t",
                                td { class: "p-3 font-medium", "{query}" }
                                td { class: "p-3 text-right", "{metric.count}" }
                                td { class: "p-3 text-right", {format!("{:.2} {}", metric.avg_time, metric.unit)} }
                                td { class: "p-3 text-right", "{metric.min_time} {metric.unit}" }
                                td { class: "p-3 text-right", "{metric.max_time} {metric.unit}" }
                                td { class: "p-3 text-right", "{metric.total_time} {metric.unit}" }
                            }
                        }
                    }
                }
                h3 { class: "text-lg font-semibold text-gray-900 mb-4", "Cache Statistics" }
                table {
                    class: "w-full bg-white rounded-xl shadow-sm text-sm",
                    thead {
                        tr {
                            th { class: "p-3 text-left", "Cache Key" }
                            th { class: "p-3 text-right", "Hits" }
                            th { class: "p-3 text-right", "Misses" }
                            th { class: "p-3 text-right", "Hit Rate" }
                        }
                    }
                    tbody {
                        if cache.is_empty() {
                            tr { td { class: "p-3 text-gray-500", colspan: "4", "No cache lookups recorded yet." } }
                        }
                        for (cache_key, metric) in cache.iter() {
                            tr {
                                key: "{cache_key}",
                                class: "border-t",
                                td { class: "p-3 font-medium", "{cache_key}" }
                                td { class: "p-3 text-right text-green-600", "{metric.hits}" }
                                td { class: "p-3 text-right text-red-600", "{metric.misses}" }
                                td { class: "p-3 text-right", {format!("{:.2}%", metric.hit_rate())} }
                            }
                        }
                    }
                }
            },
        }
    }
}
