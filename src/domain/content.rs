use crate::domain::industry::Industry;

/// Fixed sitelink set shown under the search result, six entries per tag.
pub fn sitelinks_for(industry: Industry) -> Vec<String> {
    let links: [&str; 6] = match industry {
        Industry::Finance => ["Login", "Credit Cards", "Loans", "Find ATM", "Support", "Rates"],
        Industry::Hospitality => ["Book Room", "Suites", "Offers", "Dining", "Spa", "Gallery"],
        Industry::Food => [
            "Order Online",
            "Menu",
            "Track Order",
            "Locations",
            "Deals",
            "Nutrition",
        ],
        Industry::Retail => ["Men", "Women", "New", "Sale", "Stores", "Track"],
        Industry::Healthcare => [
            "Appointments",
            "Doctors",
            "Specialties",
            "Locations",
            "Portal",
            "Services",
        ],
        Industry::Tech => [
            "Products",
            "Solutions",
            "Pricing",
            "Developers",
            "Support",
            "Login",
        ],
        Industry::General => ["About Us", "Services", "Contact", "Careers", "Blog", "Support"],
    };

    links.iter().map(|l| l.to_string()).collect()
}

/// Promotional offer copy for the chat rich card.
pub fn offer_for(industry: Industry, brand_name: &str) -> String {
    match industry {
        Industry::Finance => "Special Low Interest Personal Loan for you!".to_string(),
        Industry::Hospitality => format!("Get 25% off your next stay at {}", brand_name),
        Industry::Food => "Free delivery on your first order".to_string(),
        Industry::Retail => "Flash Sale! Extra 20% off today".to_string(),
        Industry::Healthcare => "Free consultation for new patients".to_string(),
        Industry::Tech => "Start your 14-day free trial".to_string(),
        Industry::General => format!("Get 20% off your first order with {}", brand_name),
    }
}
