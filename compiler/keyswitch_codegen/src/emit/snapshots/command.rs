fn command(s: &[char]) -> Option<u8> {
    let fold = |c: char| -> char {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        }
    };
    let len = s.len();
    if len < 3 || len > 6 {
        return None;
    }
    match fold(s[0]) {
        'G' => {
            if fold(s[1]) != 'E' || fold(s[2]) != 'T' {
                return None;
            }
            if len == 3 {
                return Some(0);
            }
            match fold(s[3]) {
                'A' => {
                    if len != 6 {
                        return None;
                    }
                    if fold(s[4]) != 'L' || fold(s[5]) != 'L' {
                        return None;
                    }
                    Some(1)
                }
                _ => None,
            }
        }
        'S' => {
            if len != 3 {
                return None;
            }
            if fold(s[1]) != 'E' || fold(s[2]) != 'T' {
                return None;
            }
            Some(2)
        }
        _ => None,
    }
}
