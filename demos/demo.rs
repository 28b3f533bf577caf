use vnaddress::AddressParser;

fn main() {
    let parser = AddressParser::new();

    println!("=== vnaddress demo ===\n");

    let test_cases = vec![
        // comma-separated
        "45 Lê Lợi, Phường Bến Nghé, Quận 1, TP.HCM, Việt Nam",
        "12 Nguyễn Trãi, P.7, Q.5, hcm",
        "7 Pasteur, Phường 6, Quận 3",
        // names outside the lexicon stay in the street
        "45 Le Loi, Ben Nghe, District 1, Ho Chi Minh, Vietnam",
        // no separators
        "45 Đinh Tiên Hoàng phường Bến Nghé quận 1",
        "12 Nguyễn Huệ phường Bến Nghé quận 1 tp.hcm việt nam",
        "268 Lý Thường Kiệt quận 10",
        // out of order
        "hcm quận 1",
        // unrecognized
        "123 Lê Lợi",
        "",
    ];

    for addr in test_cases {
        let r = parser.parse(addr);
        println!("Input: \"{}\"", addr);
        println!("  Street:   {:?}", r.street);
        println!("  Ward:     {:?}", r.ward);
        println!("  District: {:?}", r.district);
        println!("  City:     {:?}", r.city);
        println!("  Country:  {:?}", r.country);
        println!();
    }
}
