use maud::{html, Markup};

use super::layouts::{base, PageConfig};

/// (path, description) for every API route, in display order
pub const ROUTES: [(&str, &str); 5] = [
    (
        "/api/v1.0/precipitation",
        "Precipitation for the last 12 months of data, keyed by date",
    ),
    ("/api/v1.0/stations", "Identifiers of all weather stations"),
    (
        "/api/v1.0/tobs",
        "Last 12 months of temperature observations for the most active station",
    ),
    (
        "/api/v1.0/<start>",
        "Min, average and max temperature from <start> through the latest data",
    ),
    (
        "/api/v1.0/<start>/<end>",
        "Min, average and max temperature from <start> through <end>, inclusive",
    ),
];

pub fn home_page(api_base: &str) -> Markup {
    let config = PageConfig {
        title: "Hawaii Climate API",
        api_base,
    };

    base(&config, content(api_base))
}

fn content(api_base: &str) -> Markup {
    html! {
        p class="subtitle" { "Welcome to the Hawaii Climate API! Available routes:" }
        table class="table is-striped is-fullwidth" {
            thead {
                tr {
                    th { "Route" }
                    th { "Description" }
                }
            }
            tbody {
                @for (path, description) in ROUTES {
                    tr {
                        td {
                            @if path.contains('<') {
                                code { (api_base) (path) }
                            } @else {
                                a href={ (api_base) (path) } { code { (api_base) (path) } }
                            }
                        }
                        td { (description) }
                    }
                }
            }
        }
        p class="help" {
            "Dates may be given as YYYY-MM-DD or YYYYMMDD, e.g. "
            code { "/api/v1.0/2017-08-01/2017-08-23" }
        }
    }
}
