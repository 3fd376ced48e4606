//! Attendee table split into likely companions and everyone else.

use common::display::{display_phone, format_date, format_time, whatsapp_link};
use common::matching::ARRIVAL_WINDOW_MINUTES;
use common::session::ViewerSession;
use common::FlightRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FlightsTableProps {
    pub session: ViewerSession,
}

pub struct FlightsTable;

impl Component for FlightsTable {
    type Message = ();
    type Properties = FlightsTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = &ctx.props().session;

        if session.flights().is_empty() {
            return html! {
                <div class="card">
                    <h2>{ "Registered Flights" }</h2>
                    { error_banner(session.last_error()) }
                    <p class="empty">{ "No flights registered yet." }</p>
                </div>
            };
        }

        let companions = session.companions();
        html! {
            <div class="card">
                <h2>{ "Registered Flights" }</h2>
                { error_banner(session.last_error()) }
                if !companions.matches.is_empty() {
                    <section class="matches">
                        <h3>
                            { format!(
                                "Potential Travel Companions (same airport or arrival within {ARRIVAL_WINDOW_MINUTES} minutes)"
                            ) }
                        </h3>
                        { flight_table(&companions.matches) }
                    </section>
                }
                if !companions.others.is_empty() {
                    <section class="others">
                        <h3>{ companions.others_heading() }</h3>
                        { flight_table(&companions.others) }
                    </section>
                }
            </div>
        }
    }
}

fn error_banner(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <p class="error">{ message }</p> },
        None => html! {},
    }
}

fn flight_table(flights: &[&FlightRecord]) -> Html {
    html! {
        <table>
            <thead>
                <tr>
                    <th>{ "WhatsApp" }</th>
                    <th>{ "From" }</th>
                    <th>{ "Arrival" }</th>
                </tr>
            </thead>
            <tbody>
                { for flights.iter().enumerate().map(|(i, flight)| flight_row(i, flight)) }
            </tbody>
        </table>
    }
}

fn flight_row(index: usize, flight: &FlightRecord) -> Html {
    let key = flight.id.clone().unwrap_or_else(|| format!("row-{index}"));

    html! {
        <tr key={key}>
            <td>
                <a href={whatsapp_link(&flight.phone_number)} target="_blank" rel="noopener noreferrer">
                    { display_phone(&flight.phone_number) }
                </a>
            </td>
            <td><span class="airport">{ flight.departure_airport.clone() }</span></td>
            <td>
                { format_date(&flight.arrival_date) }
                <br />
                <small>{ format_time(&flight.arrival_time) }</small>
            </td>
        </tr>
    }
}
