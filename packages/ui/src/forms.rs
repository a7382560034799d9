//! Form validation.
//!
//! Each validator takes the raw field text and returns either a ready request
//! body or the message to show above the form.

use api::{
    CategoryRequest, InventoryRequest, LoginRequest, ProductRequest, ProfileUpdate,
    RegisterRequest, Role, UserUpdate,
};

pub const MIN_PASSWORD_LEN: usize = 6;

fn required(value: &str, label: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(value.to_string())
    }
}

fn email(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() || !value.contains('@') {
        return Err("Please enter a valid email".to_string());
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn login(email_text: &str, password: &str) -> Result<LoginRequest, String> {
    let email = email(email_text)?;
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(LoginRequest {
        email,
        password: password.to_string(),
    })
}

pub fn register(
    first_name: &str,
    last_name: &str,
    email_text: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, String> {
    let first_name = required(first_name, "First name")?;
    let last_name = required(last_name, "Last name")?;
    let email = email(email_text)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(RegisterRequest {
        first_name,
        last_name,
        email,
        password: password.to_string(),
    })
}

pub fn profile(first_name: &str, last_name: &str, email_text: &str) -> Result<ProfileUpdate, String> {
    Ok(ProfileUpdate {
        first_name: Some(required(first_name, "First name")?),
        last_name: Some(required(last_name, "Last name")?),
        email: Some(email(email_text)?),
    })
}

/// Admin edit of another account; every field is sent.
pub fn user_update(
    first_name: &str,
    last_name: &str,
    email_text: &str,
    role: Role,
) -> Result<UserUpdate, String> {
    Ok(UserUpdate {
        first_name: Some(required(first_name, "First name")?),
        last_name: Some(required(last_name, "Last name")?),
        email: Some(email(email_text)?),
        role: Some(role),
    })
}

pub fn product(
    name: &str,
    category_id: &str,
    price: &str,
    sku: &str,
    description: &str,
) -> Result<ProductRequest, String> {
    let name = required(name, "Name")?;
    let category_id = category_id
        .trim()
        .parse::<i64>()
        .map_err(|_| "Please choose a category".to_string())?;
    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or_else(|| "Price must be a positive number".to_string())?;
    let sku = required(sku, "SKU")?;
    Ok(ProductRequest {
        name,
        category_id,
        price,
        sku,
        description: optional(description),
        is_available: None,
    })
}

pub fn category(name: &str, description: &str) -> Result<CategoryRequest, String> {
    Ok(CategoryRequest {
        name: required(name, "Name")?,
        description: optional(description),
    })
}

pub fn inventory(product_id: &str, quantity: &str, location: &str) -> Result<InventoryRequest, String> {
    let product_id = product_id
        .trim()
        .parse::<i64>()
        .map_err(|_| "Please choose a product".to_string())?;
    Ok(InventoryRequest {
        product_id,
        quantity: stock_quantity(quantity)?,
        location: optional(location),
    })
}

/// An absolute stock level: a whole number, zero allowed.
pub fn stock_quantity(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|q| *q >= 0)
        .ok_or_else(|| "Quantity must be a whole number of zero or more".to_string())
}

/// A signed, non-zero stock change.
pub fn adjustment(value: &str) -> Result<i64, String> {
    value
        .trim()
        .trim_start_matches('+')
        .parse::<i64>()
        .ok()
        .filter(|q| *q != 0)
        .ok_or_else(|| "Enter a non-zero change, e.g. 5 or -2".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        assert!(login("ann@example.com", "x").is_ok());
        assert_eq!(login("ann", "x").unwrap_err(), "Please enter a valid email");
        assert_eq!(login("ann@example.com", "").unwrap_err(), "Password is required");

        let request = login("  ann@example.com ", "pw").unwrap();
        assert_eq!(request.email, "ann@example.com");
    }

    #[test]
    fn test_register_validation() {
        let ok = register("Ann", "Lee", "ann@example.com", "secret", "secret").unwrap();
        assert_eq!(ok.first_name, "Ann");

        assert_eq!(
            register("Ann", "Lee", "ann@example.com", "12345", "12345").unwrap_err(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            register("Ann", "Lee", "ann@example.com", "secret", "secreT").unwrap_err(),
            "Passwords do not match"
        );
        assert_eq!(
            register(" ", "Lee", "ann@example.com", "secret", "secret").unwrap_err(),
            "First name is required"
        );
    }

    #[test]
    fn test_product_validation() {
        let ok = product("Mug", "2", "9.50", "MUG-1", "").unwrap();
        assert_eq!(ok.category_id, 2);
        assert_eq!(ok.price, 9.5);
        assert!(ok.description.is_none());

        assert!(product("Mug", "", "9.50", "MUG-1", "").is_err());
        assert!(product("Mug", "2", "0", "MUG-1", "").is_err());
        assert!(product("Mug", "2", "abc", "MUG-1", "").is_err());
        assert!(product("Mug", "2", "NaN", "MUG-1", "").is_err());
        assert!(product("Mug", "2", "1", " ", "").is_err());
    }

    #[test]
    fn test_inventory_validation() {
        let ok = inventory("4", "0", " Shelf A ").unwrap();
        assert_eq!(ok.quantity, 0);
        assert_eq!(ok.location.as_deref(), Some("Shelf A"));
        assert!(inventory("4", "-1", "").is_err());
        assert!(inventory("x", "1", "").is_err());
    }

    #[test]
    fn test_adjustment() {
        assert_eq!(adjustment("+5"), Ok(5));
        assert_eq!(adjustment(" -2 "), Ok(-2));
        assert!(adjustment("0").is_err());
        assert!(adjustment("1.5").is_err());
    }

    #[test]
    fn test_profile_validation() {
        let update = profile("Ann", "Lee", "ann@shop.com").unwrap();
        assert_eq!(update.email.as_deref(), Some("ann@shop.com"));
        assert!(profile("Ann", "", "ann@shop.com").is_err());
    }

    #[test]
    fn test_user_update_validation() {
        let update = user_update(" Bo ", "Chan", "bo@shop.com", Role::Seller).unwrap();
        assert_eq!(update.first_name.as_deref(), Some("Bo"));
        assert_eq!(update.email.as_deref(), Some("bo@shop.com"));
        assert_eq!(update.role, Some(Role::Seller));

        assert_eq!(
            user_update("Bo", " ", "bo@shop.com", Role::Customer).unwrap_err(),
            "Last name is required"
        );
        assert_eq!(
            user_update("Bo", "Chan", "bo.shop.com", Role::Customer).unwrap_err(),
            "Please enter a valid email"
        );
    }
}
