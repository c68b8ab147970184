// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Kerala government holidays for 2024 and 2025, sorted by date.

use jiff::civil::date;

use super::Holiday;

pub(super) static KERALA: &[Holiday] = &[
    // 2024
    Holiday {
        date: date(2024, 1, 1),
        name: "New Year",
        label: "Public Holiday",
        description: "New Year celebration as per Gregorian calendar",
    },
    Holiday {
        date: date(2024, 1, 14),
        name: "Makara Sankranti",
        label: "Restricted Holiday",
        description: "Festival marking the transition of the Sun to Capricorn",
    },
    Holiday {
        date: date(2024, 1, 26),
        name: "Republic Day",
        label: "National Holiday",
        description: "Commemorates the adoption of the Indian Constitution",
    },
    Holiday {
        date: date(2024, 2, 14),
        name: "Sivarathri",
        label: "Government Holiday",
        description: "Night of Shiva worship and devotion",
    },
    Holiday {
        date: date(2024, 2, 24),
        name: "Guru Ravidas Jayanti",
        label: "Restricted Holiday",
        description: "Birthday of Saint Guru Ravidas",
    },
    Holiday {
        date: date(2024, 3, 8),
        name: "Maha Shivaratri",
        label: "Government Holiday",
        description: "Great night of Shiva worship",
    },
    Holiday {
        date: date(2024, 3, 18),
        name: "Holi",
        label: "Optional Holiday",
        description: "Festival of colors and spring",
    },
    Holiday {
        date: date(2024, 3, 25),
        name: "Doljatra/Holi",
        label: "Government Holiday",
        description: "Bengal New Year and festival of colors",
    },
    Holiday {
        date: date(2024, 3, 29),
        name: "Good Friday",
        label: "Public Holiday",
        description: "Christian observance of the crucifixion of Jesus Christ",
    },
    Holiday {
        date: date(2024, 4, 9),
        name: "Ram Navami",
        label: "Restricted Holiday",
        description: "Birthday of Lord Rama",
    },
    Holiday {
        date: date(2024, 4, 11),
        name: "Eid-ul-Fitr",
        label: "Public Holiday",
        description: "Festival marking the end of Ramadan",
    },
    Holiday {
        date: date(2024, 4, 14),
        name: "Vishu",
        label: "Government Holiday",
        description: "Malayalam New Year and harvest festival",
    },
    Holiday {
        date: date(2024, 4, 21),
        name: "Thrissur Pooram",
        label: "Regional Holiday",
        description: "Famous temple festival of Kerala",
    },
    Holiday {
        date: date(2024, 5, 1),
        name: "May Day",
        label: "Public Holiday",
        description: "International Workers' Day and Kerala Labour Day",
    },
    Holiday {
        date: date(2024, 5, 23),
        name: "Buddha Purnima",
        label: "Government Holiday",
        description: "Birthday of Lord Buddha",
    },
    Holiday {
        date: date(2024, 6, 17),
        name: "Bakrid/Eid al-Adha",
        label: "Public Holiday",
        description: "Festival of Sacrifice",
    },
    Holiday {
        date: date(2024, 6, 21),
        name: "Jagannath Rath Yatra",
        label: "Restricted Holiday",
        description: "Chariot festival of Lord Jagannath",
    },
    Holiday {
        date: date(2024, 7, 17),
        name: "Muharram",
        label: "Public Holiday",
        description: "Islamic New Year and day of mourning",
    },
    Holiday {
        date: date(2024, 7, 20),
        name: "Guru Purnima",
        label: "Restricted Holiday",
        description: "Full moon day dedicated to spiritual and academic teachers",
    },
    Holiday {
        date: date(2024, 8, 15),
        name: "Independence Day",
        label: "National Holiday",
        description: "Commemorates India's independence from British rule",
    },
    Holiday {
        date: date(2024, 8, 19),
        name: "Raksha Bandhan",
        label: "Restricted Holiday",
        description: "Festival celebrating the bond between brothers and sisters",
    },
    Holiday {
        date: date(2024, 8, 26),
        name: "Janmashtami",
        label: "Government Holiday",
        description: "Birthday of Lord Krishna",
    },
    Holiday {
        date: date(2024, 9, 6),
        name: "Onam (Uthradom)",
        label: "Government Holiday",
        description: "Second day of Onam celebrations",
    },
    Holiday {
        date: date(2024, 9, 7),
        name: "Onam (Thiruvonam)",
        label: "Public Holiday",
        description: "Main day of Kerala's harvest festival",
    },
    Holiday {
        date: date(2024, 9, 16),
        name: "Milad-un-Nabi",
        label: "Public Holiday",
        description: "Birthday of Prophet Muhammad",
    },
    Holiday {
        date: date(2024, 10, 2),
        name: "Gandhi Jayanti",
        label: "National Holiday",
        description: "Birthday of Mahatma Gandhi",
    },
    Holiday {
        date: date(2024, 10, 12),
        name: "Dussehra",
        label: "Government Holiday",
        description: "Victory of good over evil, celebration of Goddess Durga",
    },
    Holiday {
        date: date(2024, 10, 31),
        name: "Diwali",
        label: "Public Holiday",
        description: "Festival of Lights",
    },
    Holiday {
        date: date(2024, 11, 1),
        name: "Kerala Piravi",
        label: "Regional Holiday",
        description: "Formation Day of Kerala State (1956)",
    },
    Holiday {
        date: date(2024, 11, 15),
        name: "Guru Nanak Jayanti",
        label: "Government Holiday",
        description: "Birthday of Guru Nanak Dev, founder of Sikhism",
    },
    Holiday {
        date: date(2024, 11, 24),
        name: "Kali Puja",
        label: "Restricted Holiday",
        description: "Worship of Goddess Kali",
    },
    Holiday {
        date: date(2024, 12, 25),
        name: "Christmas",
        label: "Public Holiday",
        description: "Birth of Jesus Christ",
    },
    Holiday {
        date: date(2024, 12, 31),
        name: "New Year Eve",
        label: "Optional Holiday",
        description: "Last day of the Gregorian calendar year",
    },
    // 2025
    Holiday {
        date: date(2025, 1, 1),
        name: "New Year",
        label: "Public Holiday",
        description: "New Year celebration as per Gregorian calendar",
    },
    Holiday {
        date: date(2025, 1, 14),
        name: "Pongal/Makara Sankranti",
        label: "Government Holiday",
        description: "Harvest festival and solar transition",
    },
    Holiday {
        date: date(2025, 1, 26),
        name: "Republic Day",
        label: "National Holiday",
        description: "Commemorates the adoption of the Indian Constitution",
    },
    Holiday {
        date: date(2025, 2, 13),
        name: "Vasant Panchami",
        label: "Restricted Holiday",
        description: "Festival marking the arrival of spring",
    },
    Holiday {
        date: date(2025, 2, 26),
        name: "Maha Shivaratri",
        label: "Government Holiday",
        description: "Great night of Shiva worship",
    },
    Holiday {
        date: date(2025, 3, 14),
        name: "Holi",
        label: "Government Holiday",
        description: "Festival of colors and spring",
    },
    Holiday {
        date: date(2025, 3, 30),
        name: "Ram Navami",
        label: "Restricted Holiday",
        description: "Birthday of Lord Rama",
    },
    Holiday {
        date: date(2025, 3, 31),
        name: "Eid-ul-Fitr",
        label: "Public Holiday",
        description: "Festival marking the end of Ramadan",
    },
    Holiday {
        date: date(2025, 4, 14),
        name: "Vishu",
        label: "Government Holiday",
        description: "Malayalam New Year and harvest festival",
    },
    Holiday {
        date: date(2025, 4, 18),
        name: "Good Friday",
        label: "Public Holiday",
        description: "Christian observance of the crucifixion of Jesus Christ",
    },
    Holiday {
        date: date(2025, 4, 21),
        name: "Easter Monday",
        label: "Optional Holiday",
        description: "Day after Easter Sunday",
    },
    Holiday {
        date: date(2025, 5, 1),
        name: "May Day",
        label: "Public Holiday",
        description: "International Workers' Day and Kerala Labour Day",
    },
    Holiday {
        date: date(2025, 5, 12),
        name: "Buddha Purnima",
        label: "Government Holiday",
        description: "Birthday of Lord Buddha",
    },
    Holiday {
        date: date(2025, 6, 6),
        name: "Bakrid/Eid al-Adha",
        label: "Public Holiday",
        description: "Festival of Sacrifice",
    },
    Holiday {
        date: date(2025, 6, 15),
        name: "Vat Purnima",
        label: "Restricted Holiday",
        description: "Festival for married women",
    },
    Holiday {
        date: date(2025, 7, 5),
        name: "Muharram",
        label: "Public Holiday",
        description: "Islamic New Year and day of mourning",
    },
    Holiday {
        date: date(2025, 7, 13),
        name: "Guru Purnima",
        label: "Restricted Holiday",
        description: "Full moon day dedicated to spiritual teachers",
    },
    Holiday {
        date: date(2025, 8, 15),
        name: "Independence Day",
        label: "National Holiday",
        description: "Commemorates India's independence from British rule",
    },
    Holiday {
        date: date(2025, 8, 16),
        name: "Janmashtami",
        label: "Government Holiday",
        description: "Birthday of Lord Krishna",
    },
    Holiday {
        date: date(2025, 9, 5),
        name: "Milad-un-Nabi",
        label: "Public Holiday",
        description: "Birthday of Prophet Muhammad",
    },
    Holiday {
        date: date(2025, 9, 27),
        name: "Onam (Thiruvonam)",
        label: "Public Holiday",
        description: "Main day of Kerala's harvest festival",
    },
    Holiday {
        date: date(2025, 10, 2),
        name: "Gandhi Jayanti",
        label: "National Holiday",
        description: "Birthday of Mahatma Gandhi",
    },
    Holiday {
        date: date(2025, 10, 20),
        name: "Karva Chauth",
        label: "Optional Holiday",
        description: "Hindu festival of married women",
    },
    Holiday {
        date: date(2025, 10, 22),
        name: "Dussehra",
        label: "Government Holiday",
        description: "Victory of good over evil",
    },
    Holiday {
        date: date(2025, 11, 1),
        name: "Kerala Piravi",
        label: "Regional Holiday",
        description: "Formation Day of Kerala State",
    },
    Holiday {
        date: date(2025, 11, 5),
        name: "Guru Nanak Jayanti",
        label: "Government Holiday",
        description: "Birthday of Guru Nanak Dev",
    },
    Holiday {
        date: date(2025, 11, 12),
        name: "Diwali",
        label: "Public Holiday",
        description: "Festival of Lights",
    },
    Holiday {
        date: date(2025, 12, 25),
        name: "Christmas",
        label: "Public Holiday",
        description: "Birth of Jesus Christ",
    },
    Holiday {
        date: date(2025, 12, 31),
        name: "New Year Eve",
        label: "Optional Holiday",
        description: "Last day of the year",
    },
];
