use crate::catalog::site::{CONTACT_BUDGETS, CONTACT_CHANNELS, CONTACT_INTERESTS, OFFICES};
use crate::domain::contact::ContactRequest;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

/// `draft` refills the form after a rejected submission.
pub fn contact_page(ctx: &PageContext, draft: &ContactRequest) -> Markup {
    desktop_layout(
        "Contact",
        ctx,
        html! {
            section class="section alt" {
                div class="container center" {
                    span class="caption" { "Get in Touch" }
                    h1 { "Let's Find Your " span class="gold" { "Dream Property" } }
                    p class="muted" {
                        "Our team of luxury property specialists is ready to assist you "
                        "with personalized guidance and exclusive access."
                    }
                }
            }

            section class="container section" {
                div class="grid grid-4" {
                    @for channel in CONTACT_CHANNELS {
                        div class="card" {
                            div class="card-body" {
                                span class="caption" { (channel.label) }
                                div { strong { (channel.value) } }
                                div class="muted" { (channel.subtext) }
                            }
                        }
                    }
                }
            }

            section class="container" {
                div class="grid grid-2" {
                    div class="card" {
                        div class="card-body" {
                            h2 { "Send Us a Message" }
                            form method="post" action="/contact" class="form-stack" {
                                div class="field-row" {
                                    div {
                                        label for="name" { "Full Name" }
                                        input id="name" name="name" value=(draft.name) required;
                                    }
                                    div {
                                        label for="email" { "Email" }
                                        input id="email" type="email" name="email" value=(draft.email) required;
                                    }
                                }
                                div class="field-row" {
                                    div {
                                        label for="phone" { "Phone" }
                                        input id="phone" type="tel" name="phone" value=(draft.phone);
                                    }
                                    div {
                                        label for="interest" { "I'm Interested In" }
                                        select id="interest" name="interest" {
                                            option value="" { "Select an option" }
                                            @for (value, label) in CONTACT_INTERESTS {
                                                option value=(value) selected[draft.interest == value] { (label) }
                                            }
                                        }
                                    }
                                }
                                div {
                                    label for="budget" { "Budget Range" }
                                    select id="budget" name="budget" {
                                        option value="" { "Select budget range" }
                                        @for (value, label) in CONTACT_BUDGETS {
                                            option value=(value) selected[draft.budget == value] { (label) }
                                        }
                                    }
                                }
                                div {
                                    label for="message" { "Message" }
                                    textarea id="message" name="message" rows="5" required { (draft.message) }
                                }
                                button type="submit" class="btn btn-luxury btn-block" { "Send Message" }
                            }
                        }
                    }

                    div class="form-stack" {
                        div class="card" {
                            div class="card-body" {
                                h3 { "Book a Consultation" }
                                p class="muted" { "Meet with a luxury property advisor" }
                                p {
                                    "Schedule a one-on-one virtual or in-person consultation with "
                                    "our expert advisors to discuss your property goals."
                                }
                            }
                        }
                        div class="card" {
                            div class="card-body" {
                                h3 { "Global Offices" }
                                ul class="activity" {
                                    @for office in OFFICES {
                                        li {
                                            span { strong { (office.city) } br; span class="muted" { (office.address) } }
                                            span class="muted" { (office.phone) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
