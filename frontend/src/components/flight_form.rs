//! Submission form for one attendee's flight.
//!
//! The form owns the draft while the user types. Submitting hands a
//! [`FlightRecord`] to the parent, which does the network call; the draft is
//! cleared once the parent reports another successful submission.

use common::display::airport_code;
use common::FlightRecord;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FlightFormProps {
    /// Receives the completed record when the form is submitted.
    pub on_submit: Callback<FlightRecord>,
    /// Disables the button while a submission is in flight.
    #[prop_or_default]
    pub submitting: bool,
    /// Successful submissions so far. A change resets the form.
    #[prop_or_default]
    pub submissions: u32,
}

#[derive(Clone, Copy)]
pub enum Field {
    Phone,
    Departure,
    ArrivalDate,
    ArrivalTime,
    ReturnDate,
    ReturnTime,
    Destination,
}

pub enum Msg {
    Input(Field, String),
    Submit,
}

#[derive(Default)]
pub struct FlightForm {
    draft: FlightRecord,
}

/// Empty optional inputs are sent as absent rather than as `""`.
fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Component for FlightForm {
    type Message = Msg;
    type Properties = FlightFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, value) => {
                let draft = &mut self.draft;
                match field {
                    Field::Phone => draft.phone_number = value,
                    Field::Departure => draft.departure_airport = airport_code(&value),
                    Field::ArrivalDate => draft.arrival_date = value,
                    Field::ArrivalTime => draft.arrival_time = value,
                    Field::ReturnDate => draft.return_date = optional(value),
                    Field::ReturnTime => draft.return_time = optional(value),
                    Field::Destination => {
                        draft.destination_airport = optional(airport_code(&value))
                    }
                }
                true
            }
            Msg::Submit => {
                if !ctx.props().submitting {
                    ctx.props().on_submit.emit(self.draft.clone());
                }
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().submissions != old_props.submissions {
            self.draft = FlightRecord::default();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let submitting = ctx.props().submitting;
        let draft = &self.draft;

        let input = |field: Field| {
            link.callback(move |e: InputEvent| {
                Msg::Input(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })
        };

        html! {
            <div class="card">
                <h2>{ "Add Your Flight" }</h2>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <label for="phone">{ "WhatsApp Number *" }</label>
                    <input
                        id="phone"
                        type="tel"
                        required=true
                        placeholder="+1 555 123 4567"
                        value={draft.phone_number.clone()}
                        oninput={input(Field::Phone)}
                    />

                    <label for="departure">{ "Departure Airport *" }</label>
                    <input
                        id="departure"
                        type="text"
                        required=true
                        maxlength="3"
                        placeholder="JFK"
                        value={draft.departure_airport.clone()}
                        oninput={input(Field::Departure)}
                    />

                    <div class="row">
                        <div>
                            <label for="arrival-date">{ "Arrival Date *" }</label>
                            <input
                                id="arrival-date"
                                type="date"
                                required=true
                                value={draft.arrival_date.clone()}
                                oninput={input(Field::ArrivalDate)}
                            />
                        </div>
                        <div>
                            <label for="arrival-time">{ "Arrival Time *" }</label>
                            <input
                                id="arrival-time"
                                type="time"
                                required=true
                                value={draft.arrival_time.clone()}
                                oninput={input(Field::ArrivalTime)}
                            />
                        </div>
                    </div>

                    <fieldset class="return-leg">
                        <legend>{ "Return flight (optional)" }</legend>
                        <p class="hint">{ "Return details are not listed in the attendee table." }</p>
                        <div class="row">
                            <div>
                                <label for="return-date">{ "Return Date" }</label>
                                <input
                                    id="return-date"
                                    type="date"
                                    value={draft.return_date.clone().unwrap_or_default()}
                                    oninput={input(Field::ReturnDate)}
                                />
                            </div>
                            <div>
                                <label for="return-time">{ "Return Time" }</label>
                                <input
                                    id="return-time"
                                    type="time"
                                    value={draft.return_time.clone().unwrap_or_default()}
                                    oninput={input(Field::ReturnTime)}
                                />
                            </div>
                        </div>
                        <label for="destination">{ "Destination Airport" }</label>
                        <input
                            id="destination"
                            type="text"
                            maxlength="3"
                            placeholder="LAX"
                            value={draft.destination_airport.clone().unwrap_or_default()}
                            oninput={input(Field::Destination)}
                        />
                    </fieldset>

                    <button type="submit" disabled={submitting}>
                        { if submitting { "Adding..." } else { "Add Flight" } }
                    </button>
                </form>
            </div>
        }
    }
}
