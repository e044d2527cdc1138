use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::chat::widget::ChatWidget;
use crate::components::about::About;
use crate::components::contact_footer::ContactFooter;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::vision_mission::VisionMission;
use crate::components::why_choose_us::WhyChooseUs;
use crate::scholarship::promo_modal::ScholarshipPromoModal;

const PROMO_DELAY_MS: u32 = 2_000;

#[function_component]
pub fn Home() -> Html {
    let show_promo = use_state(|| false);

    {
        let show_promo = show_promo.clone();
        use_timeout(
            move || {
                info!("Showing scholarship promo");
                show_promo.set(true);
            },
            PROMO_DELAY_MS,
        );
    }

    let close_promo = {
        let show_promo = show_promo.clone();
        Callback::from(move |_: ()| show_promo.set(false))
    };

    html! {
        <div class="home">
            <Hero />
            <About />
            <VisionMission />
            <Services />
            <WhyChooseUs />
            <ContactFooter />
            <ChatWidget />
            <ScholarshipPromoModal is_open={*show_promo} on_close={close_promo} />
        </div>
    }
}
