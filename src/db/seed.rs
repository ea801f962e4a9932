//! Demo data loaded into empty tables on first use.

use serde_json::{json, Value};

pub fn retailers() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Sara Al-Qahtani",
            "company": "Al Noor Minimarket",
            "email": "sara@alnoor-market.com",
            "phone": "+966501112233",
            "accountStatus": "Active",
            "marketplaceStatus": "Activated",
            "joinDate": "2024-01-15"
        }),
        json!({
            "id": 2,
            "name": "Omar Haddad",
            "company": "Haddad Grocers",
            "email": "omar@haddadgrocers.com",
            "phone": "+966502223344",
            "accountStatus": "Active",
            "marketplaceStatus": "Pending",
            "joinDate": "2024-02-03"
        }),
        json!({
            "id": 3,
            "name": "Layla Mansour",
            "company": "Corner Fresh",
            "email": "layla@cornerfresh.com",
            "phone": "+966503334455",
            "accountStatus": "Inactive",
            "marketplaceStatus": "Deactivated",
            "joinDate": "2024-03-21"
        }),
    ]
}

pub fn vendors() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Khalid Saeed",
            "businessName": "Desert Dates Co.",
            "category": "Food & Beverage",
            "email": "khalid@desertdates.com",
            "phone": "+966504445566",
            "accountStatus": "Active",
            "marketplaceStatus": "Activated",
            "joinDate": "2023-11-02"
        }),
        json!({
            "id": 2,
            "name": "Noura Fahad",
            "businessName": "Clean Home Supplies",
            "category": "Household",
            "email": "noura@cleanhome.com",
            "phone": "+966505556677",
            "accountStatus": "Active",
            "marketplaceStatus": "Pending",
            "joinDate": "2024-01-09"
        }),
    ]
}

pub fn leads() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "company": "Gulf Retail Group",
            "contactName": "Ahmed Salem",
            "email": "ahmed@gulfretail.com",
            "phone": "+966506667788",
            "status": "New",
            "source": "Website",
            "value": 15000
        }),
        json!({
            "id": 2,
            "company": "Oasis Markets",
            "contactName": "Reem Khalil",
            "email": "reem@oasismarkets.com",
            "phone": "+966507778899",
            "status": "Contacted",
            "source": "Referral",
            "value": 8200.5
        }),
    ]
}

pub fn deals() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Annual supply agreement",
            "company": "Gulf Retail Group",
            "contactName": "Ahmed Salem",
            "value": 45000,
            "stage": "Prospect",
            "probability": 20,
            "closeDate": "2024-09-30"
        }),
        json!({
            "id": 2,
            "title": "Private label pilot",
            "company": "Oasis Markets",
            "contactName": "Reem Khalil",
            "value": 67500,
            "stage": "Discovery",
            "probability": 40,
            "closeDate": "2024-10-15"
        }),
        json!({
            "id": 3,
            "title": "Regional distribution",
            "company": "Haddad Grocers",
            "contactName": "Omar Haddad",
            "value": 82000,
            "stage": "Proposal",
            "probability": 60,
            "closeDate": "2024-11-01"
        }),
    ]
}

pub fn proposals() -> Vec<Value> {
    vec![json!({
        "id": 1,
        "title": "Marketplace onboarding package",
        "clientName": "Omar Haddad",
        "clientCompany": "Haddad Grocers",
        "value": 12000,
        "currency": "SAR",
        "status": "Sent",
        "validUntil": "2024-07-31",
        "sentDate": "2024-07-01",
        "createdAt": "2024-06-28"
    })]
}

pub fn tickets() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Cannot update product prices",
            "description": "Price edits are not saved from the vendor portal.",
            "status": "Open",
            "type": "Support",
            "userId": 1,
            "userType": "Vendor",
            "createdAt": "2024-07-10"
        }),
        json!({
            "id": 2,
            "title": "Bulk order export",
            "description": "Please add CSV export for past orders.",
            "status": "In Progress",
            "type": "Feature Request",
            "userId": 2,
            "userType": "Retailer",
            "createdAt": "2024-07-12"
        }),
    ]
}

pub fn user_profile() -> Vec<Value> {
    vec![json!({
        "id": 1,
        "fullName": "Mohamed Hussein",
        "email": "mohamed@gmail.com",
        "phone": "+1234567890"
    })]
}
