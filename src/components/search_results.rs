//! Search Results Component
//!
//! Rebuilds the results table after every successful search. Cells are text
//! nodes, so record values are never interpreted as markup.

use leptos::prelude::*;

use crate::context::use_console;

#[component]
pub fn SearchResults() -> impl IntoView {
    let ctx = use_console();
    view! {
        <div id="search_results">
            {move || ctx.results.get().map(|table| view! {
                <table class="table-striped">
                    <tr>
                        {table.header.into_iter().map(|column| view! { <th>{column}</th> }).collect_view()}
                    </tr>
                    {table.rows.into_iter().map(|row| view! {
                        <tr>
                            {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                        </tr>
                    }).collect_view()}
                </table>
            })}
        </div>
    }
}
