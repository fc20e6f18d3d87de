//! Built-in dataset used when the store API cannot be reached.

use crate::models::{Address, Cart, Dataset, LineItem, Product, User, UserName};

const MENS_CLOTHING: &str = "men's clothing";
const JEWELERY: &str = "jewelery";

fn product(
    id: i32,
    title: &str,
    price: f64,
    category: &str,
    description: &str,
    image: &str,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        category: category.to_string(),
        description: Some(description.to_string()),
        image: Some(format!("https://fakestoreapi.com/img/{image}")),
    }
}

struct SampleUser<'a> {
    id: i32,
    email: &'a str,
    username: &'a str,
    password: &'a str,
    name: (&'a str, &'a str),
    phone: &'a str,
    address: (&'a str, &'a str, i64, &'a str),
}

impl SampleUser<'_> {
    fn build(&self) -> User {
        let (firstname, lastname) = self.name;
        let (city, street, number, zipcode) = self.address;

        User {
            id: self.id,
            email: self.email.to_string(),
            username: self.username.to_string(),
            password: Some(self.password.to_string()),
            name: Some(UserName {
                firstname: Some(firstname.to_string()),
                lastname: Some(lastname.to_string()),
            }),
            phone: Some(self.phone.to_string()),
            address: Some(Address {
                city: Some(city.to_string()),
                street: Some(street.to_string()),
                number: Some(number.into()),
                zipcode: Some(zipcode.into()),
                ..Address::default()
            }),
        }
    }
}

fn cart(id: i32, user_id: i32, date: &str, items: &[(i32, i32)]) -> Cart {
    Cart {
        id,
        user_id: Some(user_id),
        date: Some(date.to_string()),
        products: items
            .iter()
            .map(|&(product_id, quantity)| LineItem::new(product_id, quantity))
            .collect(),
    }
}

/// Six products over two categories, three users and one cart per user.
#[must_use]
pub fn sample_dataset() -> Dataset {
    let products = vec![
        product(
            1,
            "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            109.95,
            MENS_CLOTHING,
            "Your perfect pack for everyday use and walks in the forest.",
            "81fPKd-2AYL._AC_SL1500_.jpg",
        ),
        product(
            2,
            "Mens Casual Premium Slim Fit T-Shirts",
            22.3,
            MENS_CLOTHING,
            "Slim-fitting style, contrast raglan long sleeve.",
            "71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
        ),
        product(
            3,
            "Mens Cotton Jacket",
            55.99,
            MENS_CLOTHING,
            "great outerwear jackets for Spring/Autumn/Winter.",
            "71li-ujdtUL._AC_UX679_.jpg",
        ),
        product(
            4,
            "Mens Casual Slim Fit",
            15.99,
            MENS_CLOTHING,
            "The color could be slightly different from the picture.",
            "71YXzoO-uL._AC_UY679_.jpg",
        ),
        product(
            5,
            "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
            695.0,
            JEWELERY,
            "From our Legends Collection, the Naga was inspired by the mythical water dragon.",
            "71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
        ),
        product(
            6,
            "Solid Gold Petite Micropave Ring",
            168.0,
            JEWELERY,
            "Satisfaction Guaranteed. Return or exchange any order within 30 days.",
            "61sbMi1GLJL._AC_UL640_QL65_ML3_.jpg",
        ),
    ];

    let users = [
        SampleUser {
            id: 1,
            email: "john@example.com",
            username: "johnd",
            password: "m38rmF$",
            name: ("John", "Doe"),
            phone: "1-570-236-7033",
            address: ("kilcoole", "new road", 7682, "12926-3874"),
        },
        SampleUser {
            id: 2,
            email: "janette@example.com",
            username: "janetteweaver",
            password: "g4lLSx",
            name: ("Janette", "Weaver"),
            phone: "1-539-864-7571",
            address: ("Elwood", "Jadyn view", 4289, "32411-2387"),
        },
        SampleUser {
            id: 3,
            email: "derek@example.com",
            username: "derek",
            password: "jR7QpF",
            name: ("derek", "Zulauf"),
            phone: "1-243-636-0180",
            address: ("Skilesburgh", "Ricky Curve", 305, "25201"),
        },
    ]
    .iter()
    .map(SampleUser::build)
    .collect();

    let carts = vec![
        cart(1, 1, "2020-03-02T00:00:00.000Z", &[(1, 2)]),
        cart(2, 2, "2020-03-01T00:00:00.000Z", &[(3, 1), (4, 3)]),
        cart(3, 3, "2020-03-03T00:00:00.000Z", &[(5, 1)]),
    ];

    Dataset {
        products,
        users,
        carts,
    }
}
