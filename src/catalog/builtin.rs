use crate::catalog::Catalog;
use crate::domain::model::{
    FaqEntry, PortfolioProject, PricingPlan, ProcessStep, Service, SiteProfile, Testimonial,
    WhyChooseMeItem,
};

const UNSPLASH_PARAMS: &str =
    "ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop";

fn unsplash(photo: &str, width: u32) -> String {
    format!(
        "https://images.unsplash.com/{}?{}&w={}&q=80",
        photo, UNSPLASH_PARAMS, width
    )
}

fn project(id: u32, title: &str, description: &str, photo: &str, category: &str) -> PortfolioProject {
    PortfolioProject {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image_url: unsplash(photo, 2340),
        category: category.to_string(),
    }
}

fn service(id: u32, title: &str, description: &str, icon_key: &str) -> Service {
    Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon_key: icon_key.to_string(),
    }
}

fn why(id: u32, title: &str, description: &str, icon_key: &str) -> WhyChooseMeItem {
    WhyChooseMeItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon_key: icon_key.to_string(),
    }
}

fn step(id: u32, title: &str, description: &str, icon_key: &str) -> ProcessStep {
    ProcessStep {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon_key: icon_key.to_string(),
    }
}

fn plan(id: u32, name: &str, price: &str, features: &[&str], recommended: bool) -> PricingPlan {
    PricingPlan {
        id,
        name: name.to_string(),
        price: price.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        recommended,
    }
}

fn faq(id: u32, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn diamondali() -> Catalog {
    Catalog {
        profile: SiteProfile {
            brand: "DiamondAli".to_string(),
            tagline: "VIP Websites & Mobile Apps".to_string(),
            pitch: "Premium digital solutions crafted with luxury design and cutting-edge technology. \
                    Transform your business with VIP-level websites and mobile applications."
                .to_string(),
            owner_name: "Ali Rafiq Khokhar".to_string(),
            about: strings(&[
                "Hi! I'm Ali Rafiq Khokhar, your dedicated VIP developer specializing in premium websites and mobile applications. With years of experience in creating luxury digital solutions, I transform business ideas into stunning, high-performance digital experiences.",
                "From e-commerce stores to booking systems, I deliver nothing but the best. Every project is treated with VIP attention to detail, ensuring your digital presence stands out in the competitive market.",
            ]),
            badges: strings(&["Websites", "Mobile Apps", "E-Commerce", "Booking Systems"]),
            portrait_url: "https://customer-assets.emergentagent.com/job_f3ccd94a-230a-4c4f-abea-71a2b6e3d340/artifacts/zrzzxgg1_Snapchat-652653254.jpg".to_string(),
            instagram_url: "https://www.instagram.com/quantumali5".to_string(),
            whatsapp_url: "https://wa.me/917567649104?text=Hello%20DiamondAli".to_string(),
            highlights: strings(&[
                "Premium quality guaranteed",
                "24/7 direct support",
                "Fast project delivery",
                "Custom solutions only",
            ]),
            copyright: "© 2025 DiamondAli – VIP Websites & Apps. All rights reserved.".to_string(),
        },
        projects: vec![
            project(1, "E-Commerce Luxury Store", "Premium online jewelry store with payment integration and inventory management", "photo-1441986300917-64674bd600d8", "E-Commerce"),
            project(2, "Restaurant Booking System", "Modern restaurant website with online table reservation and menu showcase", "photo-1517248135467-4c7edcad34c4", "Booking System"),
            project(3, "Corporate Business App", "Professional mobile app for corporate services with client management", "photo-1551434678-e076c223a692", "Mobile App"),
            project(4, "Fashion Portfolio Website", "Elegant portfolio website for fashion designer with gallery and contact features", "photo-1445205170230-053b83016050", "Website"),
            project(5, "Real Estate Platform", "Comprehensive real estate platform with property listings and virtual tours", "photo-1560520653-9e0e4c89eb11", "Website"),
            project(6, "Healthcare Mobile App", "Medical appointment booking app with doctor consultation features", "photo-1576091160399-112ba8d25d1f", "Mobile App"),
            project(7, "Fitness Training Platform", "Complete fitness platform with workout plans and progress tracking", "photo-1571019613454-1cb2f99b2d8b", "Website"),
            project(8, "Event Management System", "Professional event planning website with booking and management tools", "photo-1492684223066-81342ee5ff30", "Booking System"),
            project(9, "Travel Agency Website", "Beautiful travel website with package booking and destination showcase", "photo-1488646953014-85cb44e25828", "Website"),
        ],
        services: vec![
            service(1, "VIP Website Development", "Premium custom websites with luxury design and advanced functionality", "Globe"),
            service(2, "Mobile App Development", "High-performance mobile applications for iOS and Android platforms", "Smartphone"),
            service(3, "E-Commerce Stores", "Complete online stores with payment integration and inventory management", "ShoppingCart"),
            service(4, "Booking Systems", "Advanced reservation systems for restaurants, hotels, and services", "Calendar"),
            service(5, "Custom Business Solutions", "Tailored digital solutions to meet your specific business requirements", "Settings"),
        ],
        testimonials: vec![
            Testimonial {
                id: 1,
                author_name: "Sarah Johnson".to_string(),
                author_position: "CEO, Luxury Boutique".to_string(),
                content: "DiamondAli created an absolutely stunning e-commerce website for our boutique. The attention to detail and luxury design exceeded our expectations. Our sales increased by 150% within the first month!".to_string(),
                avatar_url: unsplash("photo-1494790108755-2616b612b786", 687),
            },
            Testimonial {
                id: 2,
                author_name: "Michael Rodriguez".to_string(),
                author_position: "Restaurant Owner".to_string(),
                content: "The booking system Ali developed for our restaurant is incredible. It's user-friendly, efficient, and has helped us manage reservations seamlessly. Highly recommend his VIP services!".to_string(),
                avatar_url: unsplash("photo-1472099645785-5658abf4ff4e", 1170),
            },
            Testimonial {
                id: 3,
                author_name: "Emma Thompson".to_string(),
                author_position: "Fashion Designer".to_string(),
                content: "Working with DiamondAli was a game-changer for my fashion brand. The mobile app he created showcases my designs perfectly and provides an amazing user experience. Pure gold standard work!".to_string(),
                avatar_url: unsplash("photo-1438761681033-6461ffad8d80", 1170),
            },
        ],
        why_choose_me: vec![
            why(1, "Luxury Design", "Premium, high-end designs that reflect your brand's sophistication", "Crown"),
            why(2, "Fast & Secure", "Lightning-fast loading times with enterprise-level security", "Shield"),
            why(3, "Mobile Friendly", "Perfect responsive design for all devices and screen sizes", "Smartphone"),
            why(4, "Any Business", "Versatile solutions tailored for any industry or business type", "Building"),
            why(5, "Direct Support", "24/7 personal support with direct communication channel", "Headphones"),
        ],
        process_steps: vec![
            step(1, "Discussion", "We discuss your requirements, goals, and vision in detail", "MessageCircle"),
            step(2, "Design", "Create stunning mockups and design concepts for approval", "Palette"),
            step(3, "Development", "Build your project with cutting-edge technology and best practices", "Code"),
            step(4, "Delivery", "Launch your project with full testing and ongoing support", "Rocket"),
        ],
        pricing_plans: vec![
            plan(1, "Bronze", "₹25,000", &[
                "Basic Website Design",
                "5 Pages Maximum",
                "Mobile Responsive",
                "Contact Form",
                "Basic SEO Setup",
                "30 Days Support",
            ], false),
            plan(2, "Silver", "₹50,000", &[
                "Premium Website Design",
                "10 Pages Maximum",
                "E-Commerce Integration",
                "Payment Gateway",
                "Advanced SEO",
                "60 Days Support",
                "Social Media Integration",
            ], true),
            plan(3, "Gold", "₹1,00,000", &[
                "VIP Custom Solution",
                "Unlimited Pages",
                "Mobile App Included",
                "Advanced Features",
                "Custom Integrations",
                "1 Year Support",
                "Priority Development",
            ], false),
        ],
        faqs: vec![
            faq(1, "How long does it take to complete a project?", "Project timeline varies based on complexity. Typical websites take 2-4 weeks, while mobile apps take 4-8 weeks. VIP projects get priority treatment and faster delivery."),
            faq(2, "Do you provide ongoing support and maintenance?", "Yes! All projects include comprehensive support. Bronze plan includes 30 days, Silver includes 60 days, and Gold plan includes 1 year of full support and maintenance."),
            faq(3, "Can you work with existing websites or apps?", "Absolutely! I can enhance, redesign, or add new features to your existing websites and mobile applications. We'll assess your current setup and provide the best solution."),
            faq(4, "What technologies do you use?", "I use cutting-edge technologies including React, React Native, Node.js, Python, and various modern frameworks to ensure your project is built with industry-leading standards."),
            faq(5, "Do you provide hosting and domain services?", "Yes, I can help you with hosting setup, domain registration, and complete deployment. I work with premium hosting providers to ensure optimal performance and security."),
        ],
    }
}
