//! Root component: owns the viewer session and all network traffic.
//!
//! The listing is fetched on mount, after every successful submission, and
//! on a fixed interval so that rows added by other attendees show up without
//! a reload. Overlapping refreshes are not deduplicated; the list endpoint is
//! read-only, so the last response simply wins.

use common::session::ViewerSession;
use common::FlightRecord;
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_flights, submit_flight};
use crate::components::flight_form::FlightForm;
use crate::components::flights_table::FlightsTable;
use crate::helpers::show_toast;

/// Background refresh period.
const REFRESH_INTERVAL_MS: u32 = 30_000;

pub enum Msg {
    Refresh,
    FlightsLoaded(Vec<FlightRecord>),
    LoadFailed(String),
    Submit(FlightRecord),
    SubmitSucceeded(FlightRecord),
    SubmitFailed(String),
}

pub struct App {
    session: ViewerSession,
    submitting: bool,
    _refresh: Interval,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Refresh);

        let link = ctx.link().clone();
        let refresh = Interval::new(REFRESH_INTERVAL_MS, move || link.send_message(Msg::Refresh));

        Self {
            session: ViewerSession::new(),
            submitting: false,
            _refresh: refresh,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match fetch_flights().await {
                        Ok(flights) => link.send_message(Msg::FlightsLoaded(flights)),
                        Err(err) => link.send_message(Msg::LoadFailed(err)),
                    }
                });
                false
            }
            Msg::FlightsLoaded(flights) => {
                self.session.listing_loaded(flights);
                true
            }
            Msg::LoadFailed(err) => {
                gloo_console::error!(format!("Error fetching flights: {err}"));
                self.session.listing_failed(err);
                true
            }
            Msg::Submit(record) => {
                self.submitting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match submit_flight(&record).await {
                        Ok(()) => link.send_message(Msg::SubmitSucceeded(record)),
                        Err(err) => link.send_message(Msg::SubmitFailed(err)),
                    }
                });
                true
            }
            Msg::SubmitSucceeded(record) => {
                self.submitting = false;
                self.session.submission_succeeded(record);
                show_toast("Flight added. Looking for travel companions…");
                ctx.link().send_message(Msg::Refresh);
                true
            }
            Msg::SubmitFailed(err) => {
                self.submitting = false;
                gloo_console::error!(format!("Error submitting flight: {err}"));
                show_toast(&format!("Could not add your flight: {err}"));
                self.session.submission_failed(err);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_submit = ctx.link().callback(Msg::Submit);

        html! {
            <div class="page">
                <div class="container">
                    <header class="hero">
                        <h1>{ "Conference Flights" }</h1>
                        <p>{ "Share your flight details and find fellow attendees to travel with!" }</p>
                    </header>

                    <div class="grid">
                        <FlightForm
                            {on_submit}
                            submitting={self.submitting}
                            submissions={self.session.submissions()}
                        />
                        {
                            if self.session.is_loading() {
                                html! {
                                    <div class="loading">
                                        <div class="spinner"></div>
                                        <p>{ "Loading flights..." }</p>
                                    </div>
                                }
                            } else {
                                html! { <FlightsTable session={self.session.clone()} /> }
                            }
                        }
                    </div>

                    <footer class="footer">
                        <p>{ "See you at the conference!" }</p>
                    </footer>
                </div>
            </div>
        }
    }
}
